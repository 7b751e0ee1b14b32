//! Rejections surfaced by the access controller.

use thiserror::Error;

/// Result type for access-control operations.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Client-input failures of [`Vault`](super::Vault) operations.
///
/// Messages carry no caller-supplied data, and never say whether the target
/// was missing or merely expired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The role id is unknown or the secret id does not match it.
    #[error("invalid roleID or secretID")]
    InvalidCredentials,

    /// The token is unknown or past its expiry.
    #[error("invalid or expired token")]
    InvalidToken,

    /// The secret is unknown or past its TTL.
    #[error("secret not found or expired")]
    SecretUnavailable,
}

impl AccessError {
    /// Stable machine-readable identifier for this rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessError::InvalidCredentials => "invalid_credentials",
            AccessError::InvalidToken => "invalid_token",
            AccessError::SecretUnavailable => "secret_unavailable",
        }
    }
}
