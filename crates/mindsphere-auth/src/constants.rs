//! Platform constants for token handling
//!
//! These values come from the MindSphere authentication concept: application
//! tokens are issued by the technical token manager behind the API gateway,
//! and every issued token is signed with RS256. Tokens with any other
//! signature algorithm are rejected during validation.

use std::time::Duration;

/// Technical token manager endpoint, relative to the gateway base URL
pub const TOKEN_PATH: &str = "/api/technicaltokenmanager/v3/oauth/token";

/// The only signature algorithm the platform issues tokens with
pub const EXPECTED_SIGNATURE_ALGORITHM: &str = "RS256";

/// Prefix stripped from user-supplied tokens on construction
pub const BEARER_PREFIX: &str = "Bearer ";

/// Clock-drift tolerance applied to both the `exp` and `iat` checks.
/// A token expiring within this window is treated as already expired so
/// it cannot lapse mid-flight.
pub const VALIDITY_SKEW: Duration = Duration::from_secs(5 * 60);
