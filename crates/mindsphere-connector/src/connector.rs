//! Connector to the MindSphere API
//!
//! Orchestrates the token lifecycle around every outbound call:
//! validate the held token, acquire a fresh one if needed, attach the
//! `Authorization` header, dispatch, and translate unsuccessful responses.
//!
//! Renewal is single-flight: the credential and token live under one
//! `tokio::sync::Mutex` that is held across acquisition. Concurrent callers
//! that find the token invalid serialize on the lock and at most one
//! exchange runs; whoever acquires the lock after renewal sees the stored
//! token and returns without another exchange. Response status never feeds
//! back into token state — a token only becomes invalid when validation says
//! so on a later call.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use mindsphere_auth::{CredentialKind, Credentials, acquire_token, claims};

use crate::config::ClientConfiguration;
use crate::error::{Error, Result};
use crate::response::translate_response;

/// Request body: content bytes plus the content type they are declared
/// with. The connector sends the bytes verbatim.
#[derive(Debug, Clone)]
pub struct RequestBody {
    content_type: String,
    content: Vec<u8>,
}

impl RequestBody {
    /// A body with an explicit content type.
    pub fn new(content_type: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    /// Serialize a value as an `application/json` body.
    pub fn json<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        Ok(Self::new("application/json", serde_json::to_vec(value)?))
    }
}

/// Token state guarded by the renewal lock. `token` doubles as the state
/// machine: `None` means no usable token, `Some` means a token that was
/// valid when last checked.
#[derive(Debug)]
struct TokenState {
    credentials: Credentials,
    token: Option<String>,
}

/// Connector owning one credential, at most one live token, and the shared
/// HTTP transport. One instance is shared by every resource client created
/// from the same SDK handle.
#[derive(Debug)]
pub struct Connector {
    state: Mutex<TokenState>,
    kind: CredentialKind,
    http: reqwest::Client,
    base_url: String,
}

impl Connector {
    /// Build a connector from validated credentials and configuration.
    ///
    /// The transport is created once here with the configured timeout and
    /// optional proxy and is never mutated afterwards.
    pub fn new(credentials: Credentials, configuration: ClientConfiguration) -> Result<Self> {
        configuration.validate()?;
        credentials.validate()?;
        let base_url = configuration.base_url();
        Self::build(credentials, &configuration, base_url)
    }

    #[cfg(test)]
    fn with_base_url(
        credentials: Credentials,
        configuration: ClientConfiguration,
        base_url: String,
    ) -> Result<Self> {
        configuration.validate()?;
        credentials.validate()?;
        Self::build(credentials, &configuration, base_url)
    }

    fn build(
        credentials: Credentials,
        configuration: &ClientConfiguration,
        base_url: String,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(configuration.timeout());
        if let Some(proxy) = &configuration.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("invalid proxy {proxy}: {e}")))?;
            builder = builder.proxy(proxy);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("building HTTP client: {e}")))?;

        Ok(Self {
            kind: credentials.kind(),
            state: Mutex::new(TokenState {
                credentials,
                token: None,
            }),
            http,
            base_url,
        })
    }

    /// Get a currently valid access token, renewing if necessary.
    pub async fn get_access_token(&self) -> Result<String> {
        self.ensure_token().await
    }

    /// Send an authenticated request and return the raw response body text.
    ///
    /// The URI is `{base_url}{path}`; `path` carries any query string the
    /// caller built. Caller headers must not include `Authorization` — the
    /// connector owns that header.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        extra_headers: Option<&[(String, String)]>,
    ) -> Result<String> {
        let token = self.ensure_token().await?;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        if let Some(headers) = extra_headers {
            for (name, value) in headers {
                if name.eq_ignore_ascii_case("authorization") {
                    return Err(Error::Header(
                        "Authorization is set by the connector and must not be supplied".into(),
                    ));
                }
                let header_name = HeaderName::try_from(name.as_str())
                    .map_err(|e| Error::Header(format!("invalid header name {name:?}: {e}")))?;
                let header_value = HeaderValue::try_from(value.as_str())
                    .map_err(|e| Error::Header(format!("invalid value for header {name}: {e}")))?;
                request = request.header(header_name, header_value);
            }
        }

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, body.content_type)
                .body(body.content);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("request failed: {e}")))?;

        translate_response(response).await
    }

    /// Replace the held credentials.
    ///
    /// The credential kind is fixed for the connector's lifetime; a
    /// replacement of the other kind is rejected and the held token stays
    /// untouched. On success the token is discarded so the next call
    /// reacquires with the new credentials.
    pub async fn update_credentials(&self, credentials: Credentials) -> Result<()> {
        if credentials.kind() != self.kind {
            return Err(Error::CredentialKind(format!(
                "connector was created with {} credentials, cannot switch to {}",
                self.kind.label(),
                credentials.kind().label()
            )));
        }
        credentials.validate()?;

        let mut state = self.state.lock().await;
        state.credentials = credentials;
        state.token = None;
        debug!(kind = self.kind.label(), "credentials updated, token discarded");
        Ok(())
    }

    /// The suspension point for renewal, isolated from dispatch.
    ///
    /// Holding the lock across acquisition is what makes renewal
    /// single-flight.
    async fn ensure_token(&self) -> Result<String> {
        let mut state = self.state.lock().await;

        if let Some(token) = &state.token {
            if claims::is_valid(token) {
                return Ok(token.clone());
            }
            debug!("held token expired or invalid, discarding");
            state.token = None;
        }

        let token = acquire_token(&self.http, &state.credentials, &self.base_url).await?;
        if !claims::is_valid(&token) {
            warn!(kind = self.kind.label(), "freshly acquired token failed validation");
            return Err(Error::Auth(mindsphere_auth::Error::TokenUnusable(
                "could not acquire a usable token".into(),
            )));
        }

        state.token = Some(token.clone());
        debug!(kind = self.kind.label(), "access token renewed");
        Ok(token)
    }
}
