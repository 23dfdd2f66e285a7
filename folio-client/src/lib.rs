//! Client core for the Folio document/folder-sharing admin app.
//!
//! Three cooperating pieces, all client-side and single-process:
//!
//! - [`device::DeviceIdentityStore`] owns the stable per-installation
//!   identifier the server uses to count concurrent sessions.
//! - [`session::SessionNegotiator`] performs the login handshake with the
//!   identifier attached, classifies the server's answer (authenticated,
//!   invalid credentials, session limit, failure), and manages sessions.
//! - [`password::CredentialRotationFlow`] validates and submits password
//!   changes, invalidating the local session on success.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use folio_client::api_client::ApiClient;
//! use folio_client::device::{DeviceIdentityStore, FileDeviceStore};
//! use folio_client::session::SessionNegotiator;
//! use folio_model::Credentials;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::new("https://folio.example.com");
//! let devices =
//!     DeviceIdentityStore::new(Arc::new(FileDeviceStore::new()?));
//! let sessions = SessionNegotiator::new(api, devices);
//!
//! let _session = sessions
//!     .login(&Credentials {
//!         email: "admin@example.com".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod api_client;
pub mod device;
pub mod errors;
pub mod password;
pub mod routes;
pub mod session;
pub mod testing;

pub use api_client::{ApiClient, DEVICE_ID_HEADER};
pub use device::{DeviceIdentityStore, DeviceStore, FileDeviceStore};
pub use errors::{
    ApiError, ChangePasswordError, LoginError, PasswordValidationError,
    StorageError,
};
pub use password::{CredentialRotationFlow, validate_password_change};
pub use session::SessionNegotiator;
