//! HTTP adapter over the [`Vault`](crate::vault::Vault).
//!
//! | Path | Query parameters | Success body |
//! |------|------------------|--------------|
//! | `/create-root` | `name`, `value`, `ttl` | `Root created` |
//! | `/create-user` | `username`, `password` | `User created` |
//! | `/create-approle` | `roleID`, `secretID` | `AppRole created` |
//! | `/get-token` | `roleID`, `secretID` | the token |
//! | `/get-secret` | `token`, `rootName` | the secret value |
//!
//! Access rejections answer 401 and a malformed `ttl` answers 400, both with a
//! JSON `{ "error", "message" }` body.

pub mod duration;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{build_router, ApiState};
pub use server::{serve, start_api_server};
