//! Error types for connector operations

/// Errors from connector operations.
///
/// Everything surfaces to the immediate caller of `send`/`get_access_token`;
/// the connector never retries or swallows a failure. `Api` carries the
/// platform's structured error fields when the body parses as
/// `{"errorCode": ..., "message": ...}`, and always the raw body text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication failed: {0}")]
    Auth(#[from] mindsphere_auth::Error),

    #[error("API error {status}: {body}")]
    Api {
        status: u16,
        error_code: Option<String>,
        message: Option<String>,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("credential kind mismatch: {0}")]
    CredentialKind(String),

    #[error("invalid header: {0}")]
    Header(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for connector operations.
pub type Result<T> = std::result::Result<T, Error>;
