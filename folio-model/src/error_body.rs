//! Structured server-error payload.
//!
//! Non-2xx responses carry a JSON body with at least a `message`; named
//! conditions additionally carry an `error` discriminant and, for the
//! session-quota case, the numeric session counts. Decoding is driven by the
//! discriminant alone; callers must never probe for field presence.

use serde::Deserialize;

/// Machine-readable error discriminant sent by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorCode {
    /// The account already has the maximum number of concurrent device
    /// sessions; the body carries `maxSessions` and `activeSessions`
    #[serde(rename = "SESSION_LIMIT_REACHED")]
    SessionLimitReached,
    /// Any discriminant this client does not understand
    #[serde(other)]
    Other,
}

/// JSON body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Human-readable description, surfaced to the user verbatim
    #[serde(default)]
    pub message: Option<String>,
    /// Discriminant for named conditions
    #[serde(default)]
    pub error: Option<ErrorCode>,
    /// Maximum concurrent sessions allowed (session-limit condition only)
    #[serde(default)]
    pub max_sessions: Option<u32>,
    /// Sessions currently held by the account (session-limit condition only)
    #[serde(default)]
    pub active_sessions: Option<u32>,
}
