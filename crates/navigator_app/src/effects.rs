use chrono::Local;
use client_logging::{client_info, client_warn, preview};
use navigator_client::{
    scalar_text, ClientError, ClientEvent, ClientHandle, ClientSettings, NavigationCall,
    NavigationOptions, ResultRecord, ServiceHealth,
};
use navigator_core::{Effect, Msg, NavigationOutcome, ResultItem, SessionId};

use crate::config::AppConfig;

/// An event from the IO worker, lifted to what the app loop dispatches on.
pub enum AppEvent {
    Core(Msg),
    Health(Result<ServiceHealth, ClientError>),
}

/// Owns the client handle and translates between core effects/messages and
/// the wire layer.
pub struct EffectRunner {
    handle: ClientHandle,
    options: NavigationOptions,
}

impl EffectRunner {
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let settings = ClientSettings {
            base_url: config.service_url.clone(),
            ..ClientSettings::default()
        };
        Ok(Self {
            handle: ClientHandle::new(&settings)?,
            options: NavigationOptions {
                headless: config.headless,
                timeout: config.timeout_ms,
            },
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitNavigation {
                    session,
                    instruction,
                } => {
                    client_info!(
                        "SubmitNavigation session={} instruction={}",
                        session.short(),
                        preview(&instruction, 80)
                    );
                    self.handle.submit(NavigationCall {
                        instruction,
                        session_id: session.as_str().to_string(),
                        options: self.options,
                    });
                }
            }
        }
    }

    pub fn check_health(&self) {
        self.handle.check_health();
    }

    /// Blocks until the next worker event; timestamps it on arrival for
    /// history snapshots. `None` means the worker is gone.
    pub fn wait_event(&self) -> Option<AppEvent> {
        let event = self.handle.recv()?;
        Some(map_event(
            event,
            Local::now().format("%H:%M:%S").to_string(),
        ))
    }
}

fn map_event(event: ClientEvent, completed_at: String) -> AppEvent {
    match event {
        ClientEvent::NavigationFinished { session_id, result } => {
            let outcome = match result {
                Ok(reply) if reply.success => {
                    client_info!(
                        "NavigationFinished session={} items={} content_type={} site={}",
                        preview(&session_id, 8),
                        reply.data.len(),
                        reply.content_type.as_deref().unwrap_or("general"),
                        reply.site.as_deref().unwrap_or("unknown")
                    );
                    NavigationOutcome::Completed {
                        items: reply.data.into_iter().map(map_item).collect(),
                        message: reply.message,
                        execution_time: reply.execution_time,
                        content_type: reply.content_type,
                        completed_at,
                    }
                }
                Ok(reply) => NavigationOutcome::Rejected {
                    message: reply.message,
                },
                Err(err) => {
                    client_warn!("navigation request failed: {err}");
                    NavigationOutcome::Unreachable
                }
            };
            AppEvent::Core(Msg::NavigationCompleted {
                session: SessionId::new(session_id),
                outcome,
            })
        }
        ClientEvent::HealthFinished { result } => AppEvent::Health(result),
    }
}

fn map_item(record: ResultRecord) -> ResultItem {
    fn text(value: &Option<serde_json::Value>) -> Option<String> {
        value.as_ref().map(scalar_text)
    }

    ResultItem {
        title: text(&record.title),
        price: text(&record.price),
        rating: text(&record.rating),
        company: text(&record.company),
        location: text(&record.location),
        channel: text(&record.channel),
        views: text(&record.views),
        language: text(&record.language),
        stars: text(&record.stars),
        description: text(&record.description),
        link: record.link,
        action_text: record.action_text,
    }
}

#[cfg(test)]
mod tests {
    use navigator_client::{ClientError, ClientEvent, NavigationReply, ResultRecord};
    use navigator_core::{Msg, NavigationOutcome};
    use serde_json::json;

    use super::{map_event, map_item, AppEvent};

    fn finished(result: Result<NavigationReply, ClientError>) -> ClientEvent {
        ClientEvent::NavigationFinished {
            session_id: "tag".to_string(),
            result,
        }
    }

    #[test]
    fn items_pass_through_with_numbers_as_their_json_text() {
        let record = ResultRecord {
            title: Some(json!("repo")),
            stars: Some(json!(1200)),
            rating: Some(json!(4.5)),
            price: Some(json!("$999")),
            link: Some("https://example.com".to_string()),
            ..ResultRecord::default()
        };

        let item = map_item(record);
        assert_eq!(item.title.as_deref(), Some("repo"));
        assert_eq!(item.stars.as_deref(), Some("1200"));
        assert_eq!(item.rating.as_deref(), Some("4.5"));
        assert_eq!(item.price.as_deref(), Some("$999"));
        assert_eq!(item.link.as_deref(), Some("https://example.com"));
        assert!(item.company.is_none());
    }

    #[test]
    fn successful_reply_becomes_a_completed_outcome() {
        let reply = NavigationReply {
            success: true,
            data: vec![ResultRecord {
                title: Some(json!("X")),
                ..ResultRecord::default()
            }],
            message: Some("Found 1 products".to_string()),
            execution_time: 2.5,
            content_type: Some("products".to_string()),
            ..NavigationReply::default()
        };

        let event = map_event(finished(Ok(reply)), "12:00:00".to_string());
        let AppEvent::Core(Msg::NavigationCompleted { session, outcome }) = event else {
            panic!("expected a core message");
        };
        assert_eq!(session.as_str(), "tag");
        let NavigationOutcome::Completed {
            items,
            execution_time,
            completed_at,
            ..
        } = outcome
        else {
            panic!("expected a completed outcome");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(execution_time, 2.5);
        assert_eq!(completed_at, "12:00:00");
    }

    #[test]
    fn unsuccessful_reply_becomes_a_rejection() {
        let reply = NavigationReply {
            success: false,
            message: Some("site blocked".to_string()),
            ..NavigationReply::default()
        };

        let event = map_event(finished(Ok(reply)), "12:00:00".to_string());
        let AppEvent::Core(Msg::NavigationCompleted { outcome, .. }) = event else {
            panic!("expected a core message");
        };
        assert_eq!(
            outcome,
            NavigationOutcome::Rejected {
                message: Some("site blocked".to_string()),
            }
        );
    }

    #[test]
    fn client_errors_become_unreachable() {
        let err = ClientError::Transport("connection refused".to_string());

        let event = map_event(finished(Err(err)), "12:00:00".to_string());
        let AppEvent::Core(Msg::NavigationCompleted { outcome, .. }) = event else {
            panic!("expected a core message");
        };
        assert_eq!(outcome, NavigationOutcome::Unreachable);
    }
}
