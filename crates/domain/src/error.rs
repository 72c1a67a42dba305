//! Unified error types for the domain layer
//!
//! None of these are fatal. Adapters recover `MissingAttribute` into a zero
//! bar, the registry recovers `UnknownSystem` into the generic adapter, and the
//! engine turns the remaining variants into logged no-ops.

use thiserror::Error;

/// Unified error type for HUD domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HudError {
    /// An attribute path could not be resolved on an actor or token
    #[error("Missing attribute '{path}'")]
    MissingAttribute { path: String },

    /// No system-specific adapter is registered for this id
    #[error("No adapter registered for system '{0}'")]
    UnknownSystem(String),

    /// The UI mount point for position persistence is not present
    #[error("UI anchor '{0}' not found")]
    AbsentUiAnchor(&'static str),

    /// An action referenced an actor that no longer exists
    #[error("Actor not found: {0}")]
    MissingActor(String),

    /// An action carried no usable actor reference
    #[error("Invalid target reference: {0}")]
    InvalidTargetReference(String),

    /// Parse error (for settings values)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl HudError {
    /// Create a missing attribute error
    pub fn missing_attribute(path: impl Into<String>) -> Self {
        Self::MissingAttribute { path: path.into() }
    }

    /// Create an unknown system error
    pub fn unknown_system(id: impl Into<String>) -> Self {
        Self::UnknownSystem(id.into())
    }

    /// Create a missing actor error
    pub fn missing_actor(id: impl ToString) -> Self {
        Self::MissingActor(id.to_string())
    }

    /// Create an invalid target reference error
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTargetReference(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when a setting value doesn't
    /// match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
