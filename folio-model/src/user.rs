//! User account types for the Folio admin surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to a Folio account.
///
/// The server stores roles as lowercase strings; anything it introduces
/// later decodes as [`Role::Other`] rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access: user and folder management
    Admin,
    /// Regular account with access to shared folders only
    #[default]
    User,
    /// Unrecognized role value from a newer server
    #[serde(other)]
    Other,
}

/// User record as returned by the admin listing endpoints
///
/// The password hash never leaves the server; this summary is everything an
/// administrator sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email, unique per server
    pub email: String,
    /// Display name shown in listings
    pub display_name: Option<String>,
    /// Role granted to the account
    pub role: Role,
    /// Whether the account can currently log in
    pub is_active: bool,
    /// Timestamp of account creation
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: Role,
}

/// Partial update of a user account; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_decodes_as_other() {
        let raw = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "email": "ops@example.com",
            "displayName": null,
            "role": "auditor",
            "isActive": true,
            "createdAt": "2026-01-10T09:00:00Z"
        }"#;

        let user: UserSummary =
            serde_json::from_str(raw).expect("summary deserializes");
        assert_eq!(user.role, Role::Other);
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let update = UpdateUserRequest {
            is_active: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).expect("serializes");
        assert_eq!(json, r#"{"isActive":false}"#);
    }
}
