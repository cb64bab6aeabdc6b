//! MindSphere credential and token handling
//!
//! Provides the credential types, token claim validation, and token
//! acquisition used by the connector crate. This crate is a standalone
//! library with no dependency on the connector — it can be tested and used
//! independently.
//!
//! Token flow:
//! 1. Caller builds [`Credentials`] (app key-store fields or a user token)
//! 2. Connector checks the held token with `claims::is_valid()`
//! 3. On an invalid or missing token, `acquire::acquire_token()` obtains a
//!    fresh one appropriate to the credential kind
//! 4. The fresh token is re-validated before use; one that still fails is a
//!    credential/configuration problem, not a transient fault

pub mod acquire;
pub mod claims;
pub mod constants;
pub mod credentials;
pub mod error;

pub use acquire::{TokenResponse, acquire_token};
pub use claims::{TokenClaims, is_valid, now_epoch_secs, validate_at};
pub use constants::*;
pub use credentials::{AppCredentials, CredentialKind, Credentials, UserCredentials};
pub use error::{Error, Result};
