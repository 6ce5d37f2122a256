//! Navigator core: pure request-lifecycle state machine and view-model helpers.
mod classify;
mod effect;
mod history;
mod item;
mod msg;
mod session;
mod state;
mod update;
mod view_model;

pub use classify::{action_label, section_title, ContentKind};
pub use effect::Effect;
pub use history::{HistoryEntry, HistoryStore, HISTORY_CAPACITY};
pub use item::ResultItem;
pub use msg::{Msg, NavigationOutcome};
pub use session::SessionId;
pub use state::{
    AppState, COMPLETED_FALLBACK_MESSAGE, DEFAULT_CONTENT_TYPE, EXAMPLE_INSTRUCTION,
    REJECTED_FALLBACK_MESSAGE, UNREACHABLE_MESSAGE, WORKING_MESSAGE,
};
pub use update::update;
pub use view_model::{
    AppViewModel, CardAction, CardField, HistoryRowView, ResultCardView, ResultsView, StatusView,
};
