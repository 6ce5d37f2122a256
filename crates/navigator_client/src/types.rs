use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound payload for one navigation call: the user's instruction, the
/// session identifier it was issued under, and the browser options hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationCall {
    pub instruction: String,
    pub session_id: String,
    pub options: NavigationOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationOptions {
    pub headless: bool,
    /// Timeout hint forwarded to the service, in milliseconds. The client
    /// itself enforces no request deadline.
    pub timeout: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            headless: true,
            timeout: 30_000,
        }
    }
}

/// Inbound payload. Everything except `success` is optional on the wire;
/// `site` and `session_id` are informational echoes from the service.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NavigationReply {
    pub success: bool,
    pub data: Vec<ResultRecord>,
    pub message: Option<String>,
    pub execution_time: f64,
    pub content_type: Option<String>,
    pub site: Option<String>,
    pub session_id: Option<String>,
}

/// One duck-typed record from the service. Recognized fields deserialize
/// as raw JSON values so strings and numbers pass through verbatim;
/// anything the service adds beyond these is ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    pub title: Option<Value>,
    pub price: Option<Value>,
    pub rating: Option<Value>,
    pub company: Option<Value>,
    pub location: Option<Value>,
    pub channel: Option<Value>,
    pub views: Option<Value>,
    pub language: Option<Value>,
    pub stars: Option<Value>,
    pub description: Option<Value>,
    pub link: Option<String>,
    pub action_text: Option<String>,
}

/// Reply from the service's health endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ServiceHealth {
    pub status: String,
    pub service: Option<String>,
    pub version: Option<String>,
    pub navigator_ready: bool,
}

/// Display text for a duck-typed field, without coercion: strings come out
/// unquoted, everything else as its JSON text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("invalid service url: {0}")]
    InvalidUrl(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}
