//! Bearer token claim decoding and validity checks
//!
//! Tokens are compact JWTs. Claims are decoded from the base64url segments
//! without verifying the cryptographic signature — signature trust is
//! delegated to the issuing service at acquisition time. Validation here
//! only answers "can this token still be presented": expiry and issue time
//! against the clock (with skew tolerance) and the declared signature
//! algorithm against the one the platform issues.
//!
//! Every failure mode is "invalid", never an error: a token that cannot be
//! decoded is simply a token that cannot be used.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::{EXPECTED_SIGNATURE_ALGORITHM, VALIDITY_SKEW};

#[derive(Debug, Deserialize)]
struct Header {
    alg: String,
}

#[derive(Debug, Deserialize)]
struct Payload {
    /// Expiry, epoch seconds
    exp: u64,
    /// Issued-at, epoch seconds
    iat: u64,
}

/// Claims derived from a token. Never stored alongside the token — they are
/// re-decoded on every validation so the token string stays the single
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub expires_at: u64,
    pub issued_at: u64,
    pub signature_algorithm: String,
}

impl TokenClaims {
    /// Decode the header and payload segments of a compact token.
    ///
    /// Returns `None` for anything that is not three base64url segments
    /// carrying an `alg` header and numeric `exp`/`iat` claims.
    pub fn decode(token: &str) -> Option<Self> {
        let mut segments = token.split('.');
        let header = segments.next()?;
        let payload = segments.next()?;
        // Signature segment must exist, its content is not inspected
        segments.next()?;
        if segments.next().is_some() {
            return None;
        }

        let header: Header = decode_segment(header)?;
        let payload: Payload = decode_segment(payload)?;

        Some(Self {
            expires_at: payload.exp,
            issued_at: payload.iat,
            signature_algorithm: header.alg,
        })
    }
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Option<T> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Validate a token against an explicit clock (epoch seconds). Fails closed.
///
/// Invalid when:
/// - the token cannot be decoded or a claim is missing;
/// - `now + skew >= exp` (expires within the skew window);
/// - `now + skew <= iat` (issued in the apparent future);
/// - the declared algorithm is not the platform's.
pub fn validate_at(token: &str, now_epoch_secs: u64) -> bool {
    let Some(claims) = TokenClaims::decode(token) else {
        return false;
    };

    let skew = VALIDITY_SKEW.as_secs();
    if now_epoch_secs + skew >= claims.expires_at {
        return false;
    }
    if now_epoch_secs + skew <= claims.issued_at {
        return false;
    }
    claims.signature_algorithm == EXPECTED_SIGNATURE_ALGORITHM
}

/// Validate a token against the current system clock.
pub fn is_valid(token: &str) -> bool {
    validate_at(token, now_epoch_secs())
}

/// Current time as epoch seconds.
pub fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}


#[cfg(test)]
mod tests {
    use super::test_tokens::make_token;
    use super::*;

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn token_expiring_in_one_second_is_invalid() {
        // Inside the 5-minute skew window counts as already expired
        let token = make_token(NOW + 1, NOW - 60, "RS256");
        assert!(!validate_at(&token, NOW));
    }

    #[test]
    fn token_expiring_in_ten_minutes_is_valid() {
        let token = make_token(NOW + 600, NOW - 60, "RS256");
        assert!(validate_at(&token, NOW));
    }

    #[test]
    fn token_issued_in_the_future_is_invalid() {
        // iat ten minutes ahead, exp far out — still invalid
        let token = make_token(NOW + 7200, NOW + 600, "RS256");
        assert!(!validate_at(&token, NOW));
    }

    #[test]
    fn token_with_wrong_algorithm_is_invalid() {
        let token = make_token(NOW + 600, NOW - 60, "HS256");
        assert!(!validate_at(&token, NOW));
    }

    #[test]
    fn malformed_tokens_are_invalid() {
        assert!(!validate_at("", NOW));
        assert!(!validate_at("not-a-token", NOW));
        assert!(!validate_at("a.b", NOW));
        assert!(!validate_at("a.b.c.d", NOW));
        assert!(!validate_at("!!!.###.$$$", NOW));
    }

    #[test]
    fn token_missing_a_claim_is_invalid() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(r#"{"alg":"RS256","typ":"JWT"}"#);
        let payload =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"exp":1700000600}"#);
        let token = format!("{header}.{payload}.sig");
        assert!(!validate_at(&token, NOW));
    }

    #[test]
    fn decode_exposes_claims() {
        let token = make_token(NOW + 600, NOW - 60, "RS256");
        let claims = TokenClaims::decode(&token).unwrap();
        assert_eq!(claims.expires_at, NOW + 600);
        assert_eq!(claims.issued_at, NOW - 60);
        assert_eq!(claims.signature_algorithm, "RS256");
    }

    #[test]
    fn expiry_exactly_at_skew_boundary_is_invalid() {
        // now + skew >= exp is the rejection condition, equality included
        let skew = VALIDITY_SKEW.as_secs();
        let token = make_token(NOW + skew, NOW - 60, "RS256");
        assert!(!validate_at(&token, NOW));

        let token = make_token(NOW + skew + 1, NOW - 60, "RS256");
        assert!(validate_at(&token, NOW));
    }

    #[test]
    fn is_valid_uses_system_clock() {
        let now = now_epoch_secs();
        assert!(is_valid(&make_token(now + 3600, now - 60, "RS256")));
        assert!(!is_valid(&make_token(now + 1, now - 60, "RS256")));
    }
}
