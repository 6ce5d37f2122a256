use crate::history::{HistoryEntry, HistoryStore};
use crate::msg::NavigationOutcome;
use crate::view_model::{self, AppViewModel, HistoryRowView, StatusView};
use crate::{ResultItem, SessionId};

pub const DEFAULT_CONTENT_TYPE: &str = "general";

/// Literal example instruction loaded by the example action; never
/// submitted automatically.
pub const EXAMPLE_INSTRUCTION: &str = "Search for gaming laptops under $1500 on Amazon";

pub const WORKING_MESSAGE: &str = "Working on your request...";
pub const COMPLETED_FALLBACK_MESSAGE: &str = "Task completed";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Navigation failed. Please try again.";
pub const UNREACHABLE_MESSAGE: &str =
    "Could not reach the navigation service. Check that the service is reachable and try again.";

/// Idle -> Submitting -> Idle. While Submitting, the submitted instruction
/// rides along so a completion can snapshot it (success) or restore it to
/// the input (failure) even after the input text has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestPhase {
    Idle,
    Submitting { instruction: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    session: SessionId,
    input: String,
    phase: RequestPhase,
    items: Vec<ResultItem>,
    message: Option<String>,
    execution_time: f64,
    content_type: String,
    history: HistoryStore,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionId::generate(),
            input: String::new(),
            phase: RequestPhase::Idle,
            items: Vec::new(),
            message: None,
            execution_time: 0.0,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            history: HistoryStore::default(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let working = self.is_submitting();
        let status = self.message.as_ref().map(|message| StatusView {
            message: message.clone(),
            working,
            elapsed: (self.execution_time > 0.0)
                .then(|| format!("Completed in {:.2} seconds", self.execution_time)),
        });
        let results = (!self.items.is_empty())
            .then(|| view_model::results_view(&self.items, &self.content_type));
        let history = self
            .history
            .all()
            .iter()
            .enumerate()
            .map(|(index, entry)| HistoryRowView {
                index,
                instruction: entry.instruction.clone(),
                recorded_at: entry.recorded_at.clone(),
                result_count: entry.items.len(),
                content_type: entry.content_type.clone(),
            })
            .collect();

        AppViewModel {
            session: self.session.as_str().to_string(),
            input: self.input.clone(),
            working,
            can_submit: !working && !self.input.trim().is_empty(),
            status,
            results,
            history,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, RequestPhase::Submitting { .. })
    }

    /// Returns whether a render is due and rearms the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        // Input is rendered by the driver's own prompt, not a panel; no
        // dirty mark.
        self.input = text;
    }

    pub(crate) fn begin_submission(&mut self, instruction: String) {
        self.phase = RequestPhase::Submitting { instruction };
        self.items.clear();
        self.execution_time = 0.0;
        self.message = Some(WORKING_MESSAGE.to_string());
        self.mark_dirty();
    }

    pub(crate) fn apply_outcome(&mut self, outcome: NavigationOutcome) {
        let phase = std::mem::replace(&mut self.phase, RequestPhase::Idle);
        let RequestPhase::Submitting { instruction } = phase else {
            // Nothing in flight for this session; a duplicate completion.
            return;
        };

        match outcome {
            NavigationOutcome::Completed {
                items,
                message,
                execution_time,
                content_type,
                completed_at,
            } => {
                self.items = items;
                self.message =
                    Some(message.unwrap_or_else(|| COMPLETED_FALLBACK_MESSAGE.to_string()));
                self.execution_time = execution_time;
                self.content_type = content_type
                    .filter(|tag| !tag.is_empty())
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
                self.history.record(HistoryEntry {
                    instruction,
                    items: self.items.clone(),
                    recorded_at: completed_at,
                    execution_time,
                    content_type: self.content_type.clone(),
                });
                self.input.clear();
            }
            NavigationOutcome::Rejected { message } => {
                self.items.clear();
                self.execution_time = 0.0;
                self.message = Some(
                    message
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
                );
                // Preserved so the user can edit and retry.
                self.input = instruction;
            }
            NavigationOutcome::Unreachable => {
                self.items.clear();
                self.execution_time = 0.0;
                self.message = Some(UNREACHABLE_MESSAGE.to_string());
                self.input = instruction;
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn reset_conversation(&mut self) {
        self.session = SessionId::generate();
        // An in-flight request is orphaned on purpose; its late reply is
        // tagged with the old session and gets discarded by the guard.
        self.phase = RequestPhase::Idle;
        self.items.clear();
        self.message = None;
        self.execution_time = 0.0;
        self.content_type = DEFAULT_CONTENT_TYPE.to_string();
        self.input.clear();
        self.mark_dirty();
    }

    pub(crate) fn load_history_entry(&mut self, index: usize) {
        let Some(entry) = self.history.get(index) else {
            return;
        };
        self.items = entry.items.clone();
        self.execution_time = entry.execution_time;
        self.content_type = entry.content_type.clone();
        self.input = entry.instruction.clone();
        let count = entry.items.len();
        self.message = Some(if count == 1 {
            "Loaded 1 result from history".to_string()
        } else {
            format!("Loaded {count} results from history")
        });
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
