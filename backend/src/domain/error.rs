//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic; the HTTP adapter maps them onto
//! status codes and the `{"error": ...}` envelope.

/// Failure categories raised by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request is malformed or incomplete; recoverable by correcting
    /// input. The message is surfaced verbatim to the caller.
    #[error("{message}")]
    Validation {
        /// Human-readable description of the rejected input.
        message: String,
    },

    /// A uniqueness constraint was violated (duplicate SKU).
    #[error("{message}")]
    Conflict {
        /// Human-readable conflict description.
        message: String,
    },

    /// The operation targets an id that does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable not-found description.
        message: String,
    },

    /// An unexpected persistence failure; not further classified.
    #[error("{message}")]
    Store {
        /// Underlying failure description.
        message: String,
    },
}

impl CatalogError {
    /// Create a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-found error with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a store error with the given message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
