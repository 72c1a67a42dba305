//! Error types for port operations.

/// Failure talking to the host or reading its state.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Host data could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The host rejected or could not perform a request.
    #[error("Host error in {operation}: {message}")]
    Host {
        operation: &'static str,
        message: String,
    },
}

impl PortError {
    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a Host error with operation context.
    pub fn host(operation: &'static str, message: impl ToString) -> Self {
        Self::Host {
            operation,
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for PortError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err)
    }
}
