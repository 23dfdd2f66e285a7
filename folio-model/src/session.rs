//! Login and session wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::Role;

/// Email/password pair supplied by the login form.
///
/// Ephemeral: lives for the duration of one login attempt and is never
/// persisted by the client.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`. The device identifier travels as the
/// `x-device-id` header, never inside this payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Successful login payload: the opaque bearer token plus the profile
/// fields the UI renders after authentication.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque session token, presented as a bearer token on later requests
    pub token: String,
    /// Identifier of the authenticated user
    pub user_id: Uuid,
    /// Role granted to the account
    pub role: Role,
    /// Login email echoed back by the server
    pub email: String,
    /// Display name, when the account has one
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One active session as reported by `GET /active-sessions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDescriptor {
    /// Device identifier the session is bound to
    pub device_id: String,
    /// Human-readable device name, when the client supplied one
    #[serde(default)]
    pub device_name: Option<String>,
    /// When the session was established
    pub created_at: DateTime<Utc>,
    /// Last request seen on this session
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
}

/// Body of `POST /close-other-sessions`: every session except the one
/// bound to `device_id` is terminated server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseOtherSessionsRequest {
    pub device_id: String,
}
