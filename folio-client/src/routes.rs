//! API route constants for the Folio server.
//!
//! All paths are relative to the server base URL.

/// Authentication and session endpoints
pub mod auth {
    /// Login handshake; expects the `x-device-id` header
    pub const LOGIN: &str = "/login";
    /// Rotate the account password
    pub const CHANGE_PASSWORD: &str = "/change-password";
    /// Terminate all sessions except the one bound to this device
    pub const CLOSE_OTHER_SESSIONS: &str = "/close-other-sessions";
    /// List the account's active sessions
    pub const ACTIVE_SESSIONS: &str = "/active-sessions";
}

/// User management endpoints
pub mod users {
    /// List users / create user
    pub const COLLECTION: &str = "/users";
    /// Get, update or delete a user (requires user_id parameter)
    pub const ITEM: &str = "/users/:id";
}

/// Folder management endpoints
pub mod folders {
    /// List folders / create folder
    pub const COLLECTION: &str = "/folders";
    /// Get, update or delete a folder (requires folder_id parameter)
    pub const ITEM: &str = "/folders/:id";
}

/// Helper functions for building URLs with parameters
pub mod utils {
    /// Replace a parameter in a route template
    ///
    /// # Example
    /// ```
    /// use folio_client::routes::utils::replace_param;
    /// let url = replace_param("/users/:id", ":id", "123");
    /// assert_eq!(url, "/users/123");
    /// ```
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}
