//! Error types for credential and token operations

/// Errors from credential handling and token acquisition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("token acquisition failed: {0}")]
    TokenAcquisition(String),

    #[error("unusable token: {0}")]
    TokenUnusable(String),

    #[error("credential parse error: {0}")]
    CredentialParse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
