//! In-memory secret broker.
//!
//! [`Vault`] owns four tables behind a single exclusive lock:
//!
//! - [`SecretStore`]: name → value with creation time and TTL
//! - [`AppRoleStore`]: role id → secret id
//! - [`TokenStore`]: token → expiry
//! - [`UserStore`]: username → password (never read by authorization)
//!
//! Machine clients call [`Vault::authenticate`] with an AppRole pair to obtain a
//! bearer token, then [`Vault::authorize`] with that token and a secret name to
//! read the value. Any live token reads any live secret; tokens carry no link
//! back to the role that produced them.
//!
//! Every public operation holds the lock for its whole duration, so callers
//! observe a single total order and never see a half-written record. Expiry is
//! evaluated lazily against the [`Clock`] at read time; nothing is evicted.
//!
//! ```rust
//! use chrono::Duration;
//! use latchkey::vault::{AccessError, Vault};
//!
//! let vault = Vault::new();
//! vault.create_secret("db", "s3cr3t", Duration::hours(1));
//! vault.create_app_role("role1", "secretA");
//!
//! let token = vault.authenticate("role1", "secretA").unwrap();
//! let value = vault.authorize(token.value().expose_secret(), "db").unwrap();
//! assert_eq!(value.expose_secret(), "s3cr3t");
//!
//! assert_eq!(vault.authorize("bogus", "db").unwrap_err(), AccessError::InvalidToken);
//! ```

pub mod approle;
pub mod clock;
pub mod error;
pub mod secret;
pub mod token;
pub mod types;
pub mod user;

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

pub use approle::{AppRole, AppRoleStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AccessError, Result};
pub use secret::{Secret, SecretStore};
pub use token::{OsRngTokenGenerator, Token, TokenGenerator, TokenStore, TOKEN_VALIDITY_HOURS};
pub use types::SecretString;
pub use user::{Credential, UserStore};

/// The tables guarded by the vault lock.
#[derive(Debug, Default)]
struct VaultState {
    secrets: SecretStore,
    app_roles: AppRoleStore,
    tokens: TokenStore,
    users: UserStore,
}

/// Entry counts, expired entries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VaultStats {
    pub secrets: usize,
    pub app_roles: usize,
    pub tokens: usize,
    pub users: usize,
}

/// Shared broker context. Cheap to share behind an `Arc`.
pub struct Vault {
    state: Mutex<VaultState>,
    clock: Arc<dyn Clock>,
}

impl Vault {
    /// A vault on the system clock with OS-random tokens.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_parts(clock, Box::new(OsRngTokenGenerator))
    }

    pub fn with_parts(clock: Arc<dyn Clock>, generator: Box<dyn TokenGenerator>) -> Self {
        let state = VaultState { tokens: TokenStore::new(generator), ..VaultState::default() };
        Self { state: Mutex::new(state), clock }
    }

    /// Stores `value` under `name`, replacing any previous secret of that name.
    ///
    /// Zero and negative TTLs are accepted; such secrets are never readable.
    #[instrument(skip_all, fields(secret_name = %name, ttl_ms = ttl.num_milliseconds()))]
    pub fn create_secret(&self, name: &str, value: impl Into<SecretString>, ttl: Duration) {
        let mut state = self.state.lock();
        let now = self.clock.now();
        state.secrets.put(name, value.into(), ttl, now);
        info!(created_at = %now, "secret stored");
    }

    /// Records a username/password pair. Not used by any authorization path.
    #[instrument(skip_all, fields(username = %username))]
    pub fn create_user(&self, username: &str, password: impl Into<SecretString>) {
        let mut state = self.state.lock();
        state.users.put(username, password.into());
        info!("user stored");
    }

    /// Registers or replaces the AppRole `role_id`.
    #[instrument(skip_all, fields(role_id = %role_id))]
    pub fn create_app_role(&self, role_id: &str, secret_id: impl Into<SecretString>) {
        let mut state = self.state.lock();
        state.app_roles.register(role_id, secret_id.into());
        info!("app role registered");
    }

    /// Exchanges an AppRole pair for a token valid for [`TOKEN_VALIDITY_HOURS`].
    ///
    /// Verification and issuance share one critical section: a role overwritten
    /// concurrently is either seen before or after, never half-way.
    #[instrument(skip_all, fields(role_id = %role_id))]
    pub fn authenticate(&self, role_id: &str, secret_id: &str) -> Result<Token> {
        let mut state = self.state.lock();
        if !state.app_roles.verify(role_id, secret_id) {
            warn!(reason = AccessError::InvalidCredentials.kind(), "authentication rejected");
            return Err(AccessError::InvalidCredentials);
        }

        let token = state.tokens.issue(self.clock.now());
        info!(expires_at = %token.expires_at(), "issued token");
        Ok(token)
    }

    /// Reads a live secret with a live token.
    ///
    /// The token is checked first, so an invalid token never reveals whether
    /// the secret exists.
    #[instrument(skip_all, fields(secret_name = %secret_name))]
    pub fn authorize(&self, token: &str, secret_name: &str) -> Result<SecretString> {
        let state = self.state.lock();
        let now = self.clock.now();

        if !state.tokens.validate(token, now) {
            warn!(reason = AccessError::InvalidToken.kind(), "authorization rejected");
            return Err(AccessError::InvalidToken);
        }

        match state.secrets.get(secret_name, now) {
            Some(secret) => {
                debug!("secret released");
                Ok(secret.value().clone())
            }
            None => {
                warn!(reason = AccessError::SecretUnavailable.kind(), "authorization rejected");
                Err(AccessError::SecretUnavailable)
            }
        }
    }

    pub fn stats(&self) -> VaultStats {
        let state = self.state.lock();
        VaultStats {
            secrets: state.secrets.len(),
            app_roles: state.app_roles.len(),
            tokens: state.tokens.len(),
            users: state.users.len(),
        }
    }
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault").field("stats", &self.stats()).finish_non_exhaustive()
    }
}
