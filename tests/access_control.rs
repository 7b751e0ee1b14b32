//! Integration tests for the access-control state machine.
//!
//! These drive the public `Vault` API end to end: registration, AppRole
//! authentication, token-gated reads, expiry on a manual clock, and
//! concurrent mutation.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::Duration;
use latchkey::vault::{AccessError, ManualClock, Vault, TOKEN_VALIDITY_HOURS};

fn vault_on_manual_clock() -> (Vault, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    (Vault::with_clock(clock.clone()), clock)
}

fn issue(vault: &Vault, role_id: &str, secret_id: &str) -> String {
    vault
        .authenticate(role_id, secret_id)
        .expect("authenticate")
        .value()
        .expose_secret()
        .to_string()
}

#[test]
fn scenario_register_authenticate_read() {
    let vault = Vault::new();
    vault.create_secret("db", "s3cr3t", Duration::hours(1));
    vault.create_app_role("role1", "secretA");

    let token = issue(&vault, "role1", "secretA");

    assert_eq!(vault.authorize(&token, "db").unwrap().expose_secret(), "s3cr3t");
    assert_eq!(vault.authorize(&token, "missing").unwrap_err(), AccessError::SecretUnavailable);
    assert_eq!(vault.authorize("bogus", "db").unwrap_err(), AccessError::InvalidToken);
}

#[test]
fn secret_readable_strictly_before_ttl_bound() {
    for ttl_secs in [1_i64, 30, 3600, 86_400 * 3] {
        let (vault, clock) = vault_on_manual_clock();
        vault.create_app_role("role", "id");
        vault.create_secret("s", "v", Duration::seconds(ttl_secs));
        let token = issue(&vault, "role", "id");

        clock.advance(Duration::seconds(ttl_secs) - Duration::milliseconds(1));
        // Keep the token alive for long TTLs.
        let token = if ttl_secs >= TOKEN_VALIDITY_HOURS * 3600 {
            issue(&vault, "role", "id")
        } else {
            token
        };
        assert!(vault.authorize(&token, "s").is_ok(), "ttl {ttl_secs}s should still be live");

        clock.advance(Duration::milliseconds(1));
        assert_eq!(
            vault.authorize(&token, "s").unwrap_err(),
            AccessError::SecretUnavailable,
            "ttl {ttl_secs}s should be expired at its bound"
        );
    }
}

#[test]
fn zero_and_negative_ttl_secrets_are_unreadable() {
    let (vault, clock) = vault_on_manual_clock();
    vault.create_app_role("role", "id");
    let token = issue(&vault, "role", "id");

    vault.create_secret("zero", "v", Duration::zero());
    vault.create_secret("negative", "v", Duration::minutes(-1));
    clock.advance(Duration::milliseconds(1));

    assert_eq!(vault.authorize(&token, "zero").unwrap_err(), AccessError::SecretUnavailable);
    assert_eq!(vault.authorize(&token, "negative").unwrap_err(), AccessError::SecretUnavailable);
}

#[test]
fn recreating_an_expired_secret_revives_it() {
    let (vault, clock) = vault_on_manual_clock();
    vault.create_app_role("role", "id");
    let token = issue(&vault, "role", "id");

    vault.create_secret("db", "old", Duration::minutes(1));
    clock.advance(Duration::minutes(2));
    assert!(vault.authorize(&token, "db").is_err());

    vault.create_secret("db", "new", Duration::minutes(1));
    assert_eq!(vault.authorize(&token, "db").unwrap().expose_secret(), "new");
}

#[test]
fn token_lifecycle_is_issued_live_expired() {
    let (vault, clock) = vault_on_manual_clock();
    vault.create_secret("db", "v", Duration::days(30));
    vault.create_app_role("role", "id");
    let token = issue(&vault, "role", "id");

    clock.advance(Duration::hours(TOKEN_VALIDITY_HOURS) - Duration::seconds(1));
    assert!(vault.authorize(&token, "db").is_ok());

    clock.advance(Duration::seconds(1));
    assert_eq!(vault.authorize(&token, "db").unwrap_err(), AccessError::InvalidToken);

    // Terminal: no way back to live.
    clock.advance(Duration::days(10));
    assert_eq!(vault.authorize(&token, "db").unwrap_err(), AccessError::InvalidToken);
}

#[test]
fn tokens_are_distinct_and_unbounded() {
    let vault = Vault::new();
    vault.create_secret("db", "v", Duration::hours(1));
    vault.create_app_role("role", "id");

    let tokens: HashSet<String> = (0..100).map(|_| issue(&vault, "role", "id")).collect();
    assert_eq!(tokens.len(), 100);
    assert_eq!(vault.stats().tokens, 100);

    for token in &tokens {
        assert!(vault.authorize(token, "db").is_ok());
    }
}

#[test]
fn tokens_from_any_role_read_any_secret() {
    let vault = Vault::new();
    vault.create_secret("payments", "p", Duration::hours(1));
    vault.create_secret("search", "s", Duration::hours(1));
    vault.create_app_role("payments-svc", "a");
    vault.create_app_role("search-svc", "b");

    let search_token = issue(&vault, "search-svc", "b");
    assert_eq!(vault.authorize(&search_token, "payments").unwrap().expose_secret(), "p");
}

#[test]
fn user_credentials_never_authorize() {
    let vault = Vault::new();
    vault.create_secret("db", "v", Duration::hours(1));
    vault.create_user("alice", "pw");

    assert_eq!(vault.authenticate("alice", "pw").unwrap_err(), AccessError::InvalidCredentials);
    assert_eq!(vault.authorize("pw", "db").unwrap_err(), AccessError::InvalidToken);
    assert_eq!(vault.stats().users, 1);
}

#[test]
fn concurrent_writes_and_reads_never_tear() {
    let vault = Arc::new(Vault::new());
    vault.create_app_role("role", "id");
    vault.create_secret("a", "0|0", Duration::hours(1));
    let token = issue(&vault, "role", "id");

    thread::scope(|scope| {
        for writer in 0..4 {
            let vault = Arc::clone(&vault);
            scope.spawn(move || {
                for i in 0..500 {
                    let generation = writer * 1_000 + i;
                    let value = format!("{generation}|{generation}");
                    vault.create_secret("a", value, Duration::hours(1));
                }
            });
        }

        for _ in 0..4 {
            let vault = Arc::clone(&vault);
            let token = token.clone();
            scope.spawn(move || {
                for _ in 0..500 {
                    let value = vault.authorize(&token, "a").expect("secret stays live");
                    let (left, right) =
                        value.expose_secret().split_once('|').expect("well-formed value");
                    assert_eq!(left, right, "torn secret observed");
                }
            });
        }
    });
}

#[test]
fn concurrent_authentication_issues_unique_tokens() {
    let vault = Arc::new(Vault::new());
    vault.create_app_role("role", "id");

    let tokens: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let vault = Arc::clone(&vault);
                scope.spawn(move || {
                    (0..50).map(|_| issue(&vault, "role", "id")).collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().expect("worker")).collect()
    });

    let unique: HashSet<&String> = tokens.iter().collect();
    assert_eq!(unique.len(), 400);
    assert_eq!(vault.stats().tokens, 400);
}
