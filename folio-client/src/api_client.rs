//! HTTP client for the Folio server.
//!
//! Thin wrapper over reqwest: base-URL handling, bearer-token storage, and
//! decoding of the server's structured error bodies into [`ApiError`].

use std::sync::Arc;

use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;

use folio_model::ApiErrorBody;

use crate::errors::{ApiError, GENERIC_FAILURE_MESSAGE};

/// Header carrying the per-installation device identifier.
pub const DEVICE_ID_HEADER: &str = "x-device-id";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client with bearer-token authentication
///
/// Cheap to clone; clones share the same token store, so installing or
/// clearing a token is visible to every handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client for the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a full URL from a route path.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.as_ref().trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Get the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the underlying reqwest client for requests that need bespoke
    /// headers or status handling (the login handshake).
    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Install or clear the bearer token used for authenticated requests.
    pub async fn set_token(&self, token: Option<String>) {
        *self.token_store.write().await = token;
    }

    /// Get the current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.token_store.read().await.clone()
    }

    /// Attach the bearer token to a request, when one is installed.
    async fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {}", token))
        } else {
            builder
        }
    }

    /// Execute a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))
        } else {
            Err(Self::decode_error(response).await)
        }
    }

    /// Execute a request, accepting 2xx with or without a body.
    async fn execute_no_content(
        &self,
        request: RequestBuilder,
    ) -> Result<(), ApiError> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status if status.is_success() => Ok(()),
            _ => Err(Self::decode_error(response).await),
        }
    }

    /// Decode a non-2xx response into [`ApiError::Status`].
    ///
    /// The body is parsed as the server's structured error payload; an
    /// unparseable or empty body degrades to the fixed fallback message.
    pub(crate) async fn decode_error(response: Response) -> ApiError {
        let status = response.status();
        let body: ApiErrorBody = response.json().await.unwrap_or_default();

        ApiError::Status {
            status,
            code: body.error,
            message: body
                .message
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            max_sessions: body.max_sessions,
            active_sessions: body.active_sessions,
        }
    }

    /// GET request with authentication
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);

        let request = self.with_auth(self.client.get(&url)).await;
        self.execute(request).await
    }

    /// POST request with authentication
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);

        let request = self.with_auth(self.client.post(&url).json(body)).await;
        self.execute(request).await
    }

    /// POST request for endpoints that return 204 No Content
    pub async fn post_no_content<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);

        let request = self.with_auth(self.client.post(&url).json(body)).await;
        self.execute_no_content(request).await
    }

    /// PUT request with authentication
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);

        let request = self.with_auth(self.client.put(&url).json(body)).await;
        self.execute(request).await
    }

    /// DELETE request with authentication
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("[ApiClient] DELETE {}", url);

        let request = self.with_auth(self.client.delete(&url)).await;
        self.execute_no_content(request).await
    }
}
