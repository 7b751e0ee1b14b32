//! Named secrets with a time-to-live.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::types::SecretString;

/// A stored secret and the window during which it may be read.
#[derive(Debug, Clone)]
pub struct Secret {
    value: SecretString,
    ttl: Duration,
    created_at: DateTime<Utc>,
}

impl Secret {
    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `created_at + ttl`, or `None` when that falls outside the representable range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.checked_add_signed(self.ttl)
    }

    /// Live iff `now < created_at + ttl`.
    ///
    /// A zero TTL is never live after creation and a negative TTL is never live
    /// at all. Overflowing bounds saturate: a huge positive TTL never expires,
    /// a huge negative one is always expired.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now < expires_at,
            None => self.ttl > Duration::zero(),
        }
    }
}

/// Name → secret table. Entries are overwritten on re-creation and never removed.
#[derive(Debug, Default)]
pub struct SecretStore {
    secrets: HashMap<String, Secret>,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the secret at `name`, stamping it with `now`.
    pub fn put(
        &mut self,
        name: impl Into<String>,
        value: SecretString,
        ttl: Duration,
        now: DateTime<Utc>,
    ) {
        self.secrets.insert(name.into(), Secret { value, ttl, created_at: now });
    }

    /// Returns the secret only if it exists and is live at `now`.
    pub fn get(&self, name: &str, now: DateTime<Utc>) -> Option<&Secret> {
        self.secrets.get(name).filter(|secret| secret.is_live_at(now))
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, value: &str, ttl: Duration, now: DateTime<Utc>) -> SecretStore {
        let mut store = SecretStore::new();
        store.put(name, SecretString::new(value), ttl, now);
        store
    }

    #[test]
    fn test_get_before_and_at_expiry() {
        let now = Utc::now();
        let store = store_with("db", "s3cr3t", Duration::hours(1), now);

        let secret = store.get("db", now).expect("live secret");
        assert_eq!(secret.value().expose_secret(), "s3cr3t");
        assert_eq!(secret.created_at(), now);
        assert_eq!(secret.ttl(), Duration::hours(1));

        let just_before = now + Duration::hours(1) - Duration::nanoseconds(1);
        assert!(store.get("db", just_before).is_some());
        assert!(store.get("db", now + Duration::hours(1)).is_none());
        assert!(store.get("db", now + Duration::hours(2)).is_none());
    }

    #[test]
    fn test_zero_ttl_is_dead_after_creation() {
        let now = Utc::now();
        let store = store_with("flash", "gone", Duration::zero(), now);

        assert!(store.get("flash", now + Duration::nanoseconds(1)).is_none());
        assert!(store.get("flash", now + Duration::seconds(1)).is_none());
        // The entry is still held, just unreadable.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_negative_ttl_is_never_live() {
        let now = Utc::now();
        let store = store_with("past", "never", Duration::minutes(-5), now);

        assert!(store.get("past", now).is_none());
        assert!(store.get("past", now + Duration::days(1)).is_none());
    }

    #[test]
    fn test_overflowing_ttl_saturates() {
        let now = Utc::now();
        let forever = store_with("forever", "v", Duration::MAX, now);
        assert!(forever.get("forever", now + Duration::days(365 * 100)).is_some());

        let never = store_with("never", "v", Duration::MIN, now);
        assert!(never.get("never", now).is_none());
    }

    #[test]
    fn test_put_overwrites_value_and_metadata() {
        let now = Utc::now();
        let mut store = store_with("db", "old", Duration::seconds(10), now);

        let later = now + Duration::seconds(30);
        assert!(store.get("db", later).is_none());

        store.put("db", SecretString::new("new"), Duration::seconds(10), later);
        let secret = store.get("db", later).expect("recreated secret is live");
        assert_eq!(secret.value().expose_secret(), "new");
        assert_eq!(secret.created_at(), later);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_secret() {
        let store = SecretStore::new();
        assert!(store.is_empty());
        assert!(store.get("missing", Utc::now()).is_none());
    }
}
