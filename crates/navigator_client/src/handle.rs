use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::client_warn;

use crate::client::{ClientSettings, HttpNavigatorClient, NavigatorApi};
use crate::{ClientError, NavigationCall, NavigationReply, ServiceHealth};

enum ClientCommand {
    Navigate { call: NavigationCall },
    CheckHealth,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The navigation call issued for `session_id` finished.
    NavigationFinished {
        session_id: String,
        result: Result<NavigationReply, ClientError>,
    },
    HealthFinished {
        result: Result<ServiceHealth, ClientError>,
    },
}

/// Handle to the IO worker: commands go in over a channel, events come
/// back over another. The worker thread owns its tokio runtime so callers
/// stay free of async plumbing.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let api = Arc::new(HttpNavigatorClient::new(settings)?);
        Ok(Self::with_api(api))
    }

    pub fn with_api(api: Arc<dyn NavigatorApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("client worker failed to start a runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, call: NavigationCall) {
        let _ = self.cmd_tx.send(ClientCommand::Navigate { call });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(ClientCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` means the worker is gone.
    pub fn recv(&self) -> Option<ClientEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn NavigatorApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Navigate { call } => {
            let session_id = call.session_id.clone();
            let result = api.navigate(&call).await;
            let _ = event_tx.send(ClientEvent::NavigationFinished { session_id, result });
        }
        ClientCommand::CheckHealth => {
            let result = api.health().await;
            let _ = event_tx.send(ClientEvent::HealthFinished { result });
        }
    }
}
