//! Minimal JWT inspection.
//!
//! Only the `exp` claim is read; the signature is the server's concern.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JwtClaims {
    exp: i64,
}

/// Expiry of a JWT as a Unix timestamp, if the token carries one.
pub fn expires_at(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    // Some issuers keep the padding
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: JwtClaims = serde_json::from_slice(&decoded).ok()?;
    Some(claims.exp)
}

/// True only for tokens whose `exp` claim is at or before `now`.
///
/// Opaque tokens and tokens without `exp` are not considered expired;
/// the server rejects them if they are no good.
pub fn is_expired_at(token: &str, now: i64) -> bool {
    expires_at(token).is_some_and(|exp| exp <= now)
}

pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, chrono::Utc::now().timestamp())
}
