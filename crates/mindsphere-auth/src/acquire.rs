//! Token acquisition per credential kind
//!
//! App credentials POST to the technical token manager behind the gateway;
//! the key-store client id/secret ride in the `X-SPACE-AUTH-KEY` header and
//! the tenant identity in the JSON body. User credentials never touch the
//! network — the supplied token is the credential.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use tracing::debug;

use crate::constants::TOKEN_PATH;
use crate::credentials::{AppCredentials, Credentials};
use crate::error::{Error, Result};

/// Response from the technical token manager.
///
/// The platform also returns `timestamp` and `expires_in`, but the token's
/// own `exp`/`iat` claims are authoritative for validity, so only the token
/// itself is kept.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Obtain a token appropriate to the credential kind.
///
/// `base_url` is the gateway base (`https://gateway.{region}.{domain}`).
/// The user variant resolves immediately; the app variant performs one
/// network exchange and maps every failure to [`Error::TokenAcquisition`].
/// No validity check happens here — callers re-validate the returned token.
pub async fn acquire_token(
    client: &reqwest::Client,
    credentials: &Credentials,
    base_url: &str,
) -> Result<String> {
    match credentials {
        Credentials::User(user) => Ok(user.token().to_owned()),
        Credentials::App(app) => exchange_app_credentials(client, app, base_url).await,
    }
}

/// Exchange app credentials for a signed token.
async fn exchange_app_credentials(
    client: &reqwest::Client,
    app: &AppCredentials,
    base_url: &str,
) -> Result<String> {
    let url = format!("{base_url}{TOKEN_PATH}");
    let auth_key = STANDARD.encode(format!(
        "{}:{}",
        app.client_id,
        app.client_secret.expose()
    ));

    debug!(app_name = %app.app_name, host_tenant = %app.host_tenant, "requesting technical token");

    let response = client
        .post(&url)
        .header("X-SPACE-AUTH-KEY", format!("Basic {auth_key}"))
        .json(&serde_json::json!({
            "appName": app.app_name,
            "appVersion": app.app_version,
            "hostTenant": app.host_tenant,
            "userTenant": app.user_tenant,
        }))
        .send()
        .await
        .map_err(|e| Error::TokenAcquisition(format!("token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::TokenAcquisition(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    response
        .json::<TokenResponse>()
        .await
        .map(|token| token.access_token)
        .map_err(|e| Error::TokenAcquisition(format!("invalid token response: {e}")))
}
