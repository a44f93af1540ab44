//! HTTP utilities: request headers for the Sleeper API and bearer-token checks
//! for write operations.

use crate::{Result, SleeperError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// Headers sent with every Sleeper request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Extract the token from an `Authorization: Bearer <token>` value.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Accept or reject a write before anything touches storage.
///
/// `expected` is the configured admin token; with none configured every
/// write is rejected.
pub fn authorize_bearer(header_value: Option<&str>, expected: Option<&str>) -> Result<()> {
    let Some(expected) = expected.filter(|t| !t.is_empty()) else {
        return Err(SleeperError::Unauthorized {
            reason: "no admin token configured".to_string(),
        });
    };
    let Some(header_value) = header_value else {
        return Err(SleeperError::Unauthorized {
            reason: "missing authorization header".to_string(),
        });
    };
    let Some(token) = parse_bearer(header_value) else {
        return Err(SleeperError::Unauthorized {
            reason: "expected a bearer token".to_string(),
        });
    };
    if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        return Err(SleeperError::Unauthorized {
            reason: "invalid token".to_string(),
        });
    }
    Ok(())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
