//! Error types for the schoolmap service.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the schoolmap service.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied input failed a precondition.
    ///
    /// Reported to the caller with a 4xx status and the message verbatim;
    /// never logged as a system fault.
    #[error("{message}")]
    Validation {
        /// Description of the failed precondition.
        message: String,
    },

    /// A record-store operation failed (connectivity, query failure).
    ///
    /// Reported with a 5xx status and a generic message; the cause stays in
    /// the logs.
    #[error("Store error: {message}")]
    Store {
        /// Underlying cause, for operator diagnosis.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if this error is the caller's fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Creates a validation error with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a store error with the given cause.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        assert!(Error::validation("Missing Fields").is_client_error());
        assert!(!Error::store("connection refused").is_client_error());
        assert!(!Error::internal("oops").is_client_error());
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = Error::validation("Missing Fields");
        assert_eq!(err.to_string(), "Missing Fields");
    }
}
