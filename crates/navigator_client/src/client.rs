use std::time::Duration;

use crate::{ClientError, NavigationCall, NavigationReply, ServiceHealth};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// Transport-level connect timeout. There is no deadline on the request
    /// itself; only the `timeout` hint in the payload bounds the service.
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait NavigatorApi: Send + Sync {
    async fn navigate(&self, call: &NavigationCall) -> Result<NavigationReply, ClientError>;
    async fn health(&self) -> Result<ServiceHealth, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpNavigatorClient {
    http: reqwest::Client,
    navigate_url: reqwest::Url,
    health_url: reqwest::Url,
}

impl HttpNavigatorClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        // Endpoints are resolved once; a bad base URL fails construction
        // instead of every call.
        let base = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        let navigate_url = base
            .join("navigate")
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        let health_url = base
            .join("health")
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            navigate_url,
            health_url,
        })
    }
}

#[async_trait::async_trait]
impl NavigatorApi for HttpNavigatorClient {
    async fn navigate(&self, call: &NavigationCall) -> Result<NavigationReply, ClientError> {
        let response = self
            .http
            .post(self.navigate_url.clone())
            .json(call)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        response
            .json::<NavigationReply>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }

    async fn health(&self) -> Result<ServiceHealth, ClientError> {
        let response = self
            .http
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        response
            .json::<ServiceHealth>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        return ClientError::Decode(err.to_string());
    }
    ClientError::Transport(err.to_string())
}
