//! Error types for the Folio client core.
//!
//! Uses thiserror so every error carries a user-presentable message and a
//! proper source chain.

use reqwest::StatusCode;
use thiserror::Error;

use folio_model::ErrorCode;

/// Fixed fallback shown when the server provides no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again.";

/// Storage-related errors
///
/// These never escape [`crate::device::DeviceIdentityStore::get_or_create`];
/// they surface only from explicit maintenance operations like `clear`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to initialize storage: {0}")]
    InitFailed(String),

    #[error("Failed to read from storage")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write to storage")]
    WriteFailed(#[source] std::io::Error),

    #[error("Corrupted storage data")]
    CorruptedData,
}

/// Transport and server errors raised by the generic API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and a decoded error body
    #[error("{message}")]
    Status {
        /// HTTP status of the response
        status: StatusCode,
        /// Discriminant from the error body, when the server sent one
        code: Option<ErrorCode>,
        /// Server-provided message, or the fixed fallback
        message: String,
        /// Maximum concurrent sessions (session-limit condition only)
        max_sessions: Option<u32>,
        /// Current active sessions (session-limit condition only)
        active_sessions: Option<u32>,
    },

    /// A 2xx response carried a body this client could not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Best available user-facing message for this error.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Terminal outcomes of a failed login attempt
///
/// A login either authenticates, or ends in exactly one of these. No variant
/// is retried automatically; recovery is the caller's decision (for
/// [`LoginError::SessionLimit`], typically prompting the user to close other
/// sessions and attempt the login again).
#[derive(Debug, Error)]
pub enum LoginError {
    /// The account is already at its concurrent-session quota. The fields
    /// are preserved verbatim from the server payload.
    #[error("{message}")]
    SessionLimit {
        message: String,
        max_sessions: u32,
        active_sessions: u32,
    },

    /// The server rejected the email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Transport fault or any other server rejection
    #[error("{message}")]
    Failed { message: String },
}

/// Local password-policy violations, one variant per check
///
/// Raised before any network effect; the messages are shown to the user
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordValidationError {
    #[error("All fields are required")]
    EmptyField,

    #[error("New password and confirmation do not match")]
    ConfirmationMismatch,

    #[error("New password must differ from the current password")]
    UnchangedPassword,

    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Failures of the credential-rotation flow
#[derive(Debug, Error)]
pub enum ChangePasswordError {
    /// Rejected locally; nothing was sent to the server
    #[error("{0}")]
    Validation(#[from] PasswordValidationError),

    /// The server rejected the change; the local session is untouched
    #[error("{message}")]
    Rejected { message: String },
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
