//! Login handshake and session management.
//!
//! One login attempt is a single terminal exchange: the device identifier is
//! resolved first, attached as a header, and the server's answer is
//! classified into exactly one outcome. Nothing here retries; recovery from
//! a session-limit rejection (closing other sessions, trying again) is the
//! caller's decision.

use log::{info, warn};
use reqwest::StatusCode;

use folio_model::{
    ApiErrorBody, CloseOtherSessionsRequest, Credentials, ErrorCode,
    LoginRequest, LoginResponse, SessionDescriptor,
};

use crate::api_client::{ApiClient, DEVICE_ID_HEADER};
use crate::device::DeviceIdentityStore;
use crate::errors::{ApiError, GENERIC_FAILURE_MESSAGE, LoginError};
use crate::routes;

/// Stateless orchestrator of the authentication handshake
///
/// Holds no session state of its own; the bearer token lives in the shared
/// [`ApiClient`] and the device identifier in the [`DeviceIdentityStore`].
#[derive(Debug, Clone)]
pub struct SessionNegotiator {
    api: ApiClient,
    devices: DeviceIdentityStore,
}

impl SessionNegotiator {
    /// Create a negotiator over the shared transport and identity store.
    pub fn new(api: ApiClient, devices: DeviceIdentityStore) -> Self {
        Self { api, devices }
    }

    /// Perform the login handshake.
    ///
    /// The device identifier is resolved (and created if absent) before the
    /// request is issued, and travels as the `x-device-id` header rather
    /// than in the body. On success the bearer token is installed into the
    /// API client for subsequent requests.
    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginResponse, LoginError> {
        let device_id = self.devices.get_or_create().await;
        let url = self.api.build_url(routes::auth::LOGIN);

        let response = self
            .api
            .http()
            .post(&url)
            .header(DEVICE_ID_HEADER, &device_id)
            .json(&LoginRequest::from(credentials))
            .send()
            .await
            .map_err(|e| {
                warn!("[Session] Login request failed: {}", e);
                LoginError::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let session: LoginResponse =
                response.json().await.map_err(|e| {
                    warn!("[Session] Invalid login response: {}", e);
                    LoginError::Failed {
                        message: GENERIC_FAILURE_MESSAGE.to_string(),
                    }
                })?;

            self.api.set_token(Some(session.token.clone())).await;
            info!("[Session] Authenticated as {}", session.email);
            Ok(session)
        } else {
            let body: ApiErrorBody =
                response.json().await.unwrap_or_default();
            Err(classify_rejection(status, body))
        }
    }

    /// Terminate every session of the account except the one bound to this
    /// device. The recovery path after [`LoginError::SessionLimit`].
    pub async fn close_other_sessions(&self) -> Result<(), ApiError> {
        let device_id = self.devices.get_or_create().await;
        self.api
            .post_no_content(
                routes::auth::CLOSE_OTHER_SESSIONS,
                &CloseOtherSessionsRequest { device_id },
            )
            .await
    }

    /// List the account's active sessions.
    pub async fn active_sessions(
        &self,
    ) -> Result<Vec<SessionDescriptor>, ApiError> {
        self.api.get(routes::auth::ACTIVE_SESSIONS).await
    }

    /// Terminate the local session by discarding the bearer token.
    ///
    /// The device identifier is untouched: it belongs to the installation,
    /// not the session.
    pub async fn logout(&self) {
        self.api.set_token(None).await;
        info!("[Session] Logged out");
    }

    /// Shared transport handle.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Shared device identity store.
    pub fn devices(&self) -> &DeviceIdentityStore {
        &self.devices
    }
}

/// Map a non-2xx login response to its terminal outcome.
///
/// The session-limit variant requires the named discriminant and both
/// numeric fields; a payload missing either is not that condition and
/// degrades to the generic failure.
fn classify_rejection(status: StatusCode, body: ApiErrorBody) -> LoginError {
    if body.error == Some(ErrorCode::SessionLimitReached)
        && let (Some(max_sessions), Some(active_sessions)) =
            (body.max_sessions, body.active_sessions)
    {
        return LoginError::SessionLimit {
            message: body
                .message
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            max_sessions,
            active_sessions,
        };
    }

    if status == StatusCode::UNAUTHORIZED {
        return LoginError::InvalidCredentials;
    }

    LoginError::Failed {
        message: body
            .message
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
    }
}
