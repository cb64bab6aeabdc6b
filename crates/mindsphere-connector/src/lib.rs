//! MindSphere API connector
//!
//! The authenticated HTTP core shared by every resource client: ensures a
//! valid bearer token before each call (renewing single-flight when
//! needed), dispatches the request against the API gateway, and translates
//! unsuccessful responses into typed errors.
//!
//! Resource clients are thin collaborators: they build a path plus query
//! string, hand the connector an optional body, and deserialize the body
//! text they get back.
//!
//! ```no_run
//! use mindsphere_auth::AppCredentials;
//! use mindsphere_connector::{ClientConfiguration, Method, Sdk};
//!
//! # async fn run() -> Result<(), mindsphere_connector::Error> {
//! let credentials = AppCredentials::from_json_file("credentials.json")?;
//! let sdk = Sdk::new(credentials, ClientConfiguration::default())?;
//!
//! let connector = sdk.connector();
//! let assets = connector
//!     .send(Method::GET, "/api/assetmanagement/v3/assets", None, None)
//!     .await?;
//! println!("{assets}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod response;
pub mod sdk;

pub use config::ClientConfiguration;
pub use connector::{Connector, RequestBody};
pub use error::{Error, Result};
pub use sdk::Sdk;

/// Re-exported so resource clients do not need a direct `reqwest` dependency.
pub use reqwest::Method;
