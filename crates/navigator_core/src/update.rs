use crate::state::EXAMPLE_INSTRUCTION;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // At most one outbound request per controller instance; a
            // repeat trigger while Submitting has no effect.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            let instruction = state.input().trim().to_string();
            // Empty or whitespace-only input is skipped, not an error.
            if instruction.is_empty() {
                return (state, Vec::new());
            }
            let session = state.session_id().clone();
            state.begin_submission(instruction.clone());
            vec![Effect::SubmitNavigation {
                session,
                instruction,
            }]
        }
        Msg::NavigationCompleted { session, outcome } => {
            // A reply tagged with a replaced session is stale: the user has
            // already started a new conversation. Drop it outright.
            if &session != state.session_id() {
                return (state, Vec::new());
            }
            state.apply_outcome(outcome);
            Vec::new()
        }
        Msg::NewConversationRequested => {
            state.reset_conversation();
            Vec::new()
        }
        Msg::ExampleRequested => {
            state.set_input(EXAMPLE_INSTRUCTION.to_string());
            Vec::new()
        }
        Msg::HistoryEntrySelected { index } => {
            state.load_history_entry(index);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
