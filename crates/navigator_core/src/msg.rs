use crate::{ResultItem, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the instruction input text.
    InputChanged(String),
    /// User asked to submit the current instruction.
    SubmitRequested,
    /// The remote call issued for `session` finished one way or another.
    NavigationCompleted {
        session: SessionId,
        outcome: NavigationOutcome,
    },
    /// User started a new conversation.
    NewConversationRequested,
    /// User asked for the canned example instruction.
    ExampleRequested,
    /// User picked an entry from the history list (0 = most recent).
    HistoryEntrySelected { index: usize },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What came back for one submitted request, as seen by the state machine.
/// Transport-level detail stays in the client crate; here only the three
/// presentation-relevant shapes remain.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// `success: true` reply.
    Completed {
        items: Vec<ResultItem>,
        message: Option<String>,
        execution_time: f64,
        /// Service tag; absent or empty falls back to `"general"`.
        content_type: Option<String>,
        /// Preformatted local wall-clock time for the history snapshot.
        completed_at: String,
    },
    /// Well-formed `success: false` reply.
    Rejected { message: Option<String> },
    /// The call never produced a usable reply.
    Unreachable,
}
