//! Credential types for the MindSphere API
//!
//! Two credential kinds exist and a connector is built with exactly one:
//!
//! - [`AppCredentials`]: a key-store client id/secret plus tenant identity,
//!   exchanged for a signed token at the technical token manager.
//! - [`UserCredentials`]: a pre-obtained bearer token, typically forwarded
//!   from an incoming request when the SDK runs inside a hosted application.
//!
//! Both kinds validate their fields before first use; blank or whitespace
//! values are rejected up front rather than surfacing later as opaque 401s.

use std::path::Path;

use common::Secret;
use serde::Deserialize;

use crate::constants::BEARER_PREFIX;
use crate::error::{Error, Result};

/// Application credentials, matching the platform's credential file format.
///
/// `client_secret` is wrapped in [`Secret`] so a derived `Debug` on any
/// containing struct stays safe to log.
#[derive(Debug, Clone, Deserialize)]
pub struct AppCredentials {
    #[serde(rename = "keyStoreClientId")]
    pub client_id: String,
    #[serde(rename = "keyStoreClientSecret")]
    pub client_secret: Secret<String>,
    #[serde(rename = "appName")]
    pub app_name: String,
    #[serde(rename = "appVersion")]
    pub app_version: String,
    #[serde(rename = "hostTenant")]
    pub host_tenant: String,
    #[serde(rename = "userTenant")]
    pub user_tenant: String,
}

impl AppCredentials {
    /// Create application credentials from individual fields.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        host_tenant: impl Into<String>,
        user_tenant: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
            app_name: app_name.into(),
            app_version: app_version.into(),
            host_tenant: host_tenant.into(),
            user_tenant: user_tenant.into(),
        }
    }

    /// Load application credentials from a JSON file.
    ///
    /// Expects the platform's key-store export format:
    /// `{"keyStoreClientId": ..., "keyStoreClientSecret": ..., "appName": ...,
    /// "appVersion": ..., "hostTenant": ..., "userTenant": ...}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("reading credential file {}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::CredentialParse(format!("parsing credential file: {e}")))
    }

    fn validate(&self) -> Result<()> {
        require("keyStoreClientId", &self.client_id)?;
        require("keyStoreClientSecret", self.client_secret.expose())?;
        require("appName", &self.app_name)?;
        require("appVersion", &self.app_version)?;
        require("hostTenant", &self.host_tenant)?;
        require("userTenant", &self.user_tenant)?;
        Ok(())
    }
}

/// A pre-obtained bearer token used as-is for every request.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    token: String,
}

impl UserCredentials {
    /// Create user credentials from a bearer token.
    ///
    /// A single leading `"Bearer "` prefix (case-sensitive) is stripped so
    /// the stored token is always the bare value; anything else is kept
    /// unchanged.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = match token.strip_prefix(BEARER_PREFIX) {
            Some(stripped) => stripped.to_owned(),
            None => token,
        };
        Self { token }
    }

    /// The stored token, never carrying the `"Bearer "` prefix.
    pub fn token(&self) -> &str {
        &self.token
    }

    fn validate(&self) -> Result<()> {
        require("token", &self.token)
    }
}

/// Credential kind marker. A connector's kind is fixed at construction;
/// `update_credentials` rejects a replacement of the other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    App,
    User,
}

impl CredentialKind {
    /// Kind label for logging and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            CredentialKind::App => "app",
            CredentialKind::User => "user",
        }
    }
}

/// Closed set of credential variants accepted by the SDK.
#[derive(Debug, Clone)]
pub enum Credentials {
    App(AppCredentials),
    User(UserCredentials),
}

impl Credentials {
    /// Which variant this is.
    pub fn kind(&self) -> CredentialKind {
        match self {
            Credentials::App(_) => CredentialKind::App,
            Credentials::User(_) => CredentialKind::User,
        }
    }

    /// Check that every required field is present and non-blank.
    pub fn validate(&self) -> Result<()> {
        match self {
            Credentials::App(app) => app.validate(),
            Credentials::User(user) => user.validate(),
        }
    }
}

impl From<AppCredentials> for Credentials {
    fn from(credentials: AppCredentials) -> Self {
        Credentials::App(credentials)
    }
}

impl From<UserCredentials> for Credentials {
    fn from(credentials: UserCredentials) -> Self {
        Credentials::User(credentials)
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidCredentials(format!(
            "{name} must not be blank"
        )));
    }
    Ok(())
}
