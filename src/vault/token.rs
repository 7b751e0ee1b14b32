//! Bearer tokens and the random source that mints them.
//!
//! A token is 32 bytes from the operating system's CSPRNG, rendered as URL-safe
//! base64. Tokens are valid for [`TOKEN_VALIDITY_HOURS`] from issuance and are
//! never refreshed, revoked or purged; once `now >= expires_at` they are dead
//! weight in the table.

use std::collections::HashMap;
use std::fmt;

use base64::{engine::general_purpose::URL_SAFE, Engine};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

use super::types::SecretString;

/// Raw entropy per token, before encoding.
pub const TOKEN_BYTES: usize = 32;

/// Lifetime of every issued token.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

pub fn token_validity() -> Duration {
    Duration::hours(TOKEN_VALIDITY_HOURS)
}

/// Source of token key material.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws [`TOKEN_BYTES`] from `OsRng` and encodes them as padded URL-safe base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngTokenGenerator;

impl TokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let encoded = URL_SAFE.encode(bytes);
        bytes.zeroize();
        encoded
    }
}

/// A freshly issued token, handed back to the authenticated caller.
#[derive(Debug, Clone)]
pub struct Token {
    value: SecretString,
    expires_at: DateTime<Utc>,
}

impl Token {
    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn into_value(self) -> SecretString {
        self.value
    }
}

/// Token value → expiry table.
pub struct TokenStore {
    tokens: HashMap<String, DateTime<Utc>>,
    generator: Box<dyn TokenGenerator>,
}

impl TokenStore {
    pub fn new(generator: Box<dyn TokenGenerator>) -> Self {
        Self { tokens: HashMap::new(), generator }
    }

    /// Mints and records a token expiring [`TOKEN_VALIDITY_HOURS`] after `now`.
    ///
    /// A generated value that collides with a stored one simply replaces it.
    pub fn issue(&mut self, now: DateTime<Utc>) -> Token {
        let value = self.generator.generate();
        let expires_at = now + token_validity();
        self.tokens.insert(value.clone(), expires_at);
        Token { value: SecretString::new(value), expires_at }
    }

    /// True iff `value` was issued and `now` is before its expiry.
    pub fn validate(&self, value: &str, now: DateTime<Utc>) -> bool {
        self.tokens.get(value).is_some_and(|expires_at| now < *expires_at)
    }

    /// Number of recorded tokens, expired ones included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new(Box::new(OsRngTokenGenerator))
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore").field("tokens", &self.tokens.len()).finish_non_exhaustive()
    }
}
