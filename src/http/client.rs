//! API Client
//!
//! Thin wrapper over a transport with a fixed base URL. Every request gets
//! a JSON content type and, when a session exists, a bearer token.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::error::{ClientError, ClientResult};
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::session::TokenStore;

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Configured HTTP client shared by all services
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: TokenStore,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        store: TokenStore,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.store
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Build a request
    ///
    /// Reads the token store synchronously at build time: the
    /// `Authorization` header is present exactly when a token is stored
    /// at this moment.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiRequest> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if let Some(token) = self.store.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = body.map(serde_json::to_string).transpose()?;

        Ok(ApiRequest {
            method,
            url: self.url(path),
            headers,
            body,
        })
    }

    /// Send a built request; non-2xx responses become [`ClientError::Status`]
    pub async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            authorized = request.header("Authorization").is_some(),
            "Sending API request"
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::debug!(status = response.status, "API request rejected");
            return Err(ClientError::Status {
                status: response.status,
                message: error_message(&response),
            });
        }

        Ok(response)
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse> {
        let request = self.build_request(method, path, body)?;
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> ClientResult<ApiResponse> {
        self.request::<()>(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<ApiResponse> {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<ApiResponse> {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<ApiResponse> {
        self.request::<()>(Method::Delete, path, None).await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("store", &self.store)
            .finish()
    }
}

/// Error text of a rejected response
///
/// Prefers a JSON `message` or `error` field, then the raw body, then a
/// generic message.
fn error_message(response: &ApiResponse) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    if let Ok(body) = serde_json::from_str::<ErrorBody>(&response.body) {
        if let Some(message) = body.message.or(body.error) {
            return message;
        }
    }

    let text = response.body.trim();
    if text.is_empty() {
        format!("Request failed with status {}", response.status)
    } else {
        text.to_string()
    }
}
