//! Password-change wire type.

use serde::Serialize;

/// Body of `POST /change-password`.
///
/// The confirmation field is a client-side concern and never reaches the
/// wire; validation happens before this request is built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
