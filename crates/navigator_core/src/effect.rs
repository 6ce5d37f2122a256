use crate::SessionId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue one remote navigation call, tagged with the session that was
    /// current at submit time.
    SubmitNavigation {
        session: SessionId,
        instruction: String,
    },
}
