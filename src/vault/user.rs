//! Username/password credentials.
//!
//! Populated through the administrative path but consulted by no authorization
//! decision; held for a future login mode.

use std::collections::HashMap;

use super::types::SecretString;

#[derive(Debug, Clone)]
pub struct Credential {
    username: String,
    password: SecretString,
}

impl Credential {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, Credential>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the credential for `username`.
    pub fn put(&mut self, username: impl Into<String>, password: SecretString) {
        let username = username.into();
        self.users.insert(username.clone(), Credential { username, password });
    }

    pub fn get(&self, username: &str) -> Option<&Credential> {
        self.users.get(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
