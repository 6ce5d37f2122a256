use std::fmt;

use uuid::Uuid;

/// Opaque per-conversation identifier sent with every request so the
/// service can correlate them. Display-grade randomness only; replaced,
/// never mutated, when a new conversation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Produces a fresh identifier with no dependency on prior state.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Rebuilds an identifier that travelled over the wire, so a completion
    /// can be matched against the session that issued the request.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading 8 characters, for prompts and log lines.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(8)]
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionId;

    #[test]
    fn generated_ids_are_non_empty_and_distinct() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn short_form_is_a_prefix() {
        let id = SessionId::new("0123456789abcdef");
        assert_eq!(id.short(), "01234567");
        assert_eq!(SessionId::new("abc").short(), "abc");
    }
}
