//! Human-readable TTL parsing for the `ttl` query parameter.
//!
//! Accepts everything `humantime` does (`1h`, `90m`, `1h30m`, `2h 5m`,
//! `500ms`), a bare `0`, and a leading `-` for negative durations.

use chrono::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TtlError {
    #[error("ttl is required")]
    Missing,

    #[error("invalid ttl '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("ttl '{0}' is out of range")]
    OutOfRange(String),
}

pub fn parse_ttl(raw: &str) -> Result<Duration, TtlError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(TtlError::Missing);
    }

    let (negative, magnitude) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if magnitude == "0" {
        return Ok(Duration::zero());
    }

    let parsed = humantime::parse_duration(magnitude).map_err(|e| TtlError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    let ttl = Duration::from_std(parsed).map_err(|_| TtlError::OutOfRange(input.to_string()))?;

    Ok(if negative { -ttl } else { ttl })
}
