//! Auth Service
//!
//! Login, registration and logout against `/auth/*`.

use crate::http::{ApiClient, ClientResult};
use crate::models::{AuthResponse, Credentials};
use crate::session::TokenStore;

/// Authentication operations
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    store: TokenStore,
}

impl AuthService {
    pub fn new(client: ApiClient, store: TokenStore) -> Self {
        Self { client, store }
    }

    /// `POST /auth/login`
    ///
    /// Stores the session when the response carries a non-empty token.
    /// The stored username is the one the backend echoes, or the submitted
    /// one if the payload has none. Errors are returned unchanged and leave
    /// the store untouched.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let credentials = Credentials::new(username, password);
        let response: AuthResponse = self.client.post("/auth/login", &credentials).await?.json()?;

        match response.token.as_deref().filter(|token| !token.is_empty()) {
            Some(token) => {
                let name = response.username.as_deref().unwrap_or(username);
                self.store.set(token, name);
                tracing::info!(username = name, "Logged in");
            }
            None => {
                tracing::warn!(username, "Login response carried no token; session not stored");
            }
        }

        Ok(response)
    }

    /// `POST /auth/register`
    ///
    /// Returns the raw response body. Never touches the token store.
    pub async fn register(&self, username: &str, password: &str) -> ClientResult<String> {
        let credentials = Credentials::new(username, password);
        let response = self.client.post("/auth/register", &credentials).await?;

        tracing::info!(username, "Registered account");
        Ok(response.body)
    }

    /// Drop the stored session. No network call.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("Logged out");
    }

    /// The raw stored token (not the formatted header)
    ///
    /// A stored empty string reads as no token, the same rule the request
    /// builder and the route guard apply.
    pub fn get_auth_header(&self) -> Option<String> {
        self.store.get()
    }

    /// Username of the stored session
    pub fn current_user(&self) -> Option<String> {
        self.store.get_username()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::RecordingTransport;
    use crate::http::{ApiResponse, ClientError, Method};
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (AuthService, TokenStore, Arc<RecordingTransport>) {
        let store = TokenStore::in_memory();
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::new("http://test/api", store.clone(), transport.clone());
        (AuthService::new(client, store.clone()), store, transport)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let (auth, store, transport) = setup();
        transport.push_json(json!({"token": "t1", "username": "u1"}));

        let response = auth.login("u1", "secret").await.unwrap();
        assert_eq!(response.token.as_deref(), Some("t1"));

        assert_eq!(store.get(), Some("t1".to_string()));
        assert_eq!(store.get_username(), Some("u1".to_string()));
        assert_eq!(auth.get_auth_header(), Some("t1".to_string()));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://test/api/auth/login");
        let body: Credentials = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, Credentials::new("u1", "secret"));
    }

    #[tokio::test]
    async fn test_login_without_token_leaves_store_empty() {
        let (auth, store, transport) = setup();
        transport.push_json(json!({"message": "ok"}));

        let response = auth.login("u1", "secret").await.unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.extra["message"], "ok");
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_login_falls_back_to_submitted_username() {
        let (auth, store, transport) = setup();
        transport.push_json(json!({"token": "t2"}));

        auth.login("carol", "pw").await.unwrap();
        assert_eq!(store.get_username(), Some("carol".to_string()));
    }

    #[tokio::test]
    async fn test_login_failure_propagates() {
        let (auth, store, transport) = setup();
        transport.push_response(ApiResponse::new(401, "Invalid username or password"));

        let err = auth.login("u1", "wrong").await.unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid username or password");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_register_never_touches_store() {
        let (auth, store, transport) = setup();

        transport.push_response(ApiResponse::new(200, "User registered successfully"));
        let body = auth.register("dave", "pw").await.unwrap();
        assert_eq!(body, "User registered successfully");
        assert!(!store.is_logged_in());

        // Even a token-shaped response is not stored
        transport.push_json(json!({"token": "sneaky", "username": "dave"}));
        auth.register("dave", "pw").await.unwrap();
        assert!(!store.is_logged_in());
        assert_eq!(store.get_username(), None);

        assert_eq!(
            transport.last_request().unwrap().url,
            "http://test/api/auth/register"
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (auth, store, _) = setup();
        store.set("t1", "u1");
        assert_eq!(auth.current_user(), Some("u1".to_string()));

        auth.logout();
        assert_eq!(store.get(), None);
        assert_eq!(store.get_username(), None);
        assert_eq!(auth.current_user(), None);
    }

    #[tokio::test]
    async fn test_requests_after_login_are_authorized() {
        let (auth, _, transport) = setup();
        transport.push_json(json!({"token": "t1", "username": "u1"}));

        auth.login("u1", "secret").await.unwrap();
        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);

        auth.register("other", "pw").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().header("Authorization"),
            Some("Bearer t1")
        );
    }

    #[tokio::test]
    async fn test_empty_stored_token_reads_as_absent() {
        let (auth, store, transport) = setup();
        store.set("", "ghost");

        assert_eq!(auth.get_auth_header(), None);
        assert_eq!(auth.current_user(), Some("ghost".to_string()));

        // Consistent with the header the client sends
        auth.register("ghost", "pw").await.unwrap();
        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);
    }
}
