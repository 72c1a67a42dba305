//! Correlation ID for tracing one refresh.

use std::fmt;
use uuid::Uuid;

/// Correlation ID attached to every log line of a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a new correlation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short format (first 8 characters) for logging.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(CorrelationId::new(), CorrelationId::new());
    }

    #[test]
    fn short_form_is_eight_chars() {
        let id = CorrelationId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.to_string().replace('-', "").starts_with(&id.short()));
    }
}
