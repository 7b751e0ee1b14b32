//! AppRole machine credentials.

use std::collections::HashMap;

use super::types::SecretString;

/// One `(role_id, secret_id)` pair.
#[derive(Debug, Clone)]
pub struct AppRole {
    role_id: String,
    secret_id: SecretString,
}

impl AppRole {
    pub fn role_id(&self) -> &str {
        &self.role_id
    }
}

/// Role id → AppRole table. Re-registering a role id replaces its secret id.
#[derive(Debug, Default)]
pub struct AppRoleStore {
    roles: HashMap<String, AppRole>,
}

impl AppRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the pairing. Secret ids need not be unique across roles.
    pub fn register(&mut self, role_id: impl Into<String>, secret_id: SecretString) {
        let role_id = role_id.into();
        self.roles.insert(role_id.clone(), AppRole { role_id, secret_id });
    }

    /// True iff `role_id` is registered with exactly `secret_id`.
    pub fn verify(&self, role_id: &str, secret_id: &str) -> bool {
        self.roles.get(role_id).is_some_and(|role| role.secret_id.ct_matches(secret_id))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
