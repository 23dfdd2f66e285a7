//! Credential rotation: password policy and the change-password flow.
//!
//! Validation runs entirely locally and short-circuits at the first
//! failure, so a rejected request never reaches the network. A successful
//! rotation invalidates the local session immediately; the caller must
//! route the user back to authentication.

use log::{info, warn};

use folio_model::ChangePasswordRequest;

use crate::api_client::ApiClient;
use crate::errors::{ChangePasswordError, PasswordValidationError};
use crate::routes;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a password-change triple against the local policy.
///
/// Checks run in a fixed order and stop at the first failure: non-empty
/// fields, confirmation match, new differs from current, then the strength
/// policy (length, uppercase, lowercase, digit).
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordValidationError> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(PasswordValidationError::EmptyField);
    }
    if new != confirm {
        return Err(PasswordValidationError::ConfirmationMismatch);
    }
    if new == current {
        return Err(PasswordValidationError::UnchangedPassword);
    }
    check_policy(new)
}

fn check_policy(password: &str) -> Result<(), PasswordValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordValidationError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordValidationError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordValidationError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordValidationError::MissingDigit);
    }
    Ok(())
}

/// Password-rotation flow over the shared transport
///
/// Stateless: each call validates, submits, and reports a terminal outcome.
#[derive(Debug, Clone)]
pub struct CredentialRotationFlow {
    api: ApiClient,
}

impl CredentialRotationFlow {
    /// Create a flow over the shared transport.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Rotate the account password.
    ///
    /// On success the local bearer token is cleared before returning: the
    /// prior session must be considered invalid from this instant, and the
    /// user re-authenticates with the new credentials. Server-side token
    /// revocation is the server's responsibility. On failure the session is
    /// left untouched.
    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), ChangePasswordError> {
        validate_password_change(current, new, confirm)?;

        let request = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };

        match self
            .api
            .post_no_content(routes::auth::CHANGE_PASSWORD, &request)
            .await
        {
            Ok(()) => {
                self.api.set_token(None).await;
                info!("[Password] Password changed; local session cleared");
                Ok(())
            }
            Err(e) => {
                warn!("[Password] Change rejected: {}", e);
                Err(ChangePasswordError::Rejected {
                    message: e.message(),
                })
            }
        }
    }
}
