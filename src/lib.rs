//! # Latchkey
//!
//! A minimal in-memory secret broker. It stores named secrets with a TTL,
//! authenticates machine clients with AppRole `(role_id, secret_id)` pairs,
//! issues 24-hour bearer tokens, and releases a secret only to a caller
//! presenting a live token.
//!
//! ## Architecture
//!
//! ```text
//! HTTP adapter (api) → Vault (access controller) → SecretStore / AppRoleStore / TokenStore
//!        ↓                        ↓
//!  request tracing        single exclusive lock
//! ```
//!
//! Nothing is persisted; restarting the process forgets every secret, role
//! and token.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use latchkey::{api::start_api_server, vault::Vault, Config, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_env()?;
//!     start_api_server(&config.api, Arc::new(Vault::new())).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod vault;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Error, Result};
pub use vault::{AccessError, Vault};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
