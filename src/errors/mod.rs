//! # Error Handling
//!
//! Process-level errors for the Latchkey broker: configuration, listener and
//! I/O failures. Client rejections from the access controller live in
//! [`crate::vault::AccessError`] and never pass through this type.

/// Custom result type for Latchkey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Latchkey service
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener and HTTP serving errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
