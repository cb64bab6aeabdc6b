//! SDK entry point
//!
//! [`Sdk`] validates credentials and configuration once, builds a single
//! [`Connector`], and hands it out to resource clients. Every client created
//! from the same handle shares the connector, and therefore the token and
//! the pooled HTTP transport.

use std::sync::Arc;

use mindsphere_auth::Credentials;

use crate::config::ClientConfiguration;
use crate::connector::Connector;
use crate::error::Result;

/// Handle from which resource clients are created.
#[derive(Clone, Debug)]
pub struct Sdk {
    connector: Arc<Connector>,
}

impl Sdk {
    /// Create an SDK handle.
    ///
    /// Fails fast on blank credential fields, an unusable configuration, or
    /// an invalid proxy URL — before any network traffic.
    pub fn new(
        credentials: impl Into<Credentials>,
        configuration: ClientConfiguration,
    ) -> Result<Self> {
        let connector = Connector::new(credentials.into(), configuration)?;
        Ok(Self {
            connector: Arc::new(connector),
        })
    }

    /// The shared connector for building resource clients.
    pub fn connector(&self) -> Arc<Connector> {
        Arc::clone(&self.connector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mindsphere_auth::{AppCredentials, UserCredentials};

    #[test]
    fn new_with_valid_app_credentials() {
        let credentials = AppCredentials::new("a", "b", "c", "d", "e", "f");
        assert!(Sdk::new(credentials, ClientConfiguration::default()).is_ok());
    }

    #[test]
    fn new_with_blank_app_fields_fails() {
        let credentials = AppCredentials::new("  ", "", "   ", "  ", "  ", "  ");
        let err = Sdk::new(credentials, ClientConfiguration::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(mindsphere_auth::Error::InvalidCredentials(_))
        ));
    }

    #[test]
    fn new_with_valid_user_credentials() {
        let credentials = UserCredentials::new("fake_token");
        assert!(Sdk::new(credentials, ClientConfiguration::default()).is_ok());
    }

    #[test]
    fn new_with_blank_user_token_fails() {
        let err = Sdk::new(UserCredentials::new(""), ClientConfiguration::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(mindsphere_auth::Error::InvalidCredentials(_))
        ));
    }

    #[test]
    fn clients_share_one_connector() {
        let sdk = Sdk::new(UserCredentials::new("t"), ClientConfiguration::default()).unwrap();
        let a = sdk.connector();
        let b = sdk.connector();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
