//! Application Bootstrap
//!
//! Wires storage, HTTP client, services and router into one handle that
//! a front end (browser or CLI) mounts.

use std::sync::Arc;

use crate::config::Config;
use crate::http::{ApiClient, HttpTransport};
use crate::router::Router;
use crate::services::{AuthService, ExpenseService, PersonService};
use crate::session::{StorageBackend, TokenStore};

/// The assembled application
#[derive(Debug, Clone)]
pub struct App {
    store: TokenStore,
    client: ApiClient,
    auth: AuthService,
    expenses: ExpenseService,
    persons: PersonService,
    router: Router,
}

impl App {
    /// Assemble the application over a storage backend and a transport
    pub fn new(
        base_url: impl Into<String>,
        backend: Arc<dyn StorageBackend>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let store = TokenStore::new(backend);
        let client = ApiClient::new(base_url, store.clone(), transport);

        Self {
            auth: AuthService::new(client.clone(), store.clone()),
            expenses: ExpenseService::new(client.clone()),
            persons: PersonService::new(client.clone()),
            router: Router::new(store.clone()),
            store,
            client,
        }
    }

    /// Native application: file-backed session and reqwest transport
    #[cfg(feature = "native")]
    pub fn from_config(config: &Config) -> Self {
        use crate::http::ReqwestTransport;
        use crate::session::FileStorage;

        tracing::debug!(
            base_url = %config.api.base_url,
            session = %config.session.path,
            "Bootstrapping application"
        );

        Self::new(
            config.api.base_url.clone(),
            Arc::new(FileStorage::new(config.session_path())),
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// Application over the configured base URL with caller-supplied parts
    pub fn with_config(
        config: &Config,
        backend: Arc<dyn StorageBackend>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::new(config.api.base_url.clone(), backend, transport)
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn expenses(&self) -> &ExpenseService {
        &self.expenses
    }

    pub fn persons(&self) -> &PersonService {
        &self.persons
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::RecordingTransport;
    use crate::router::{View, EXPENSES_PATH, LOGIN_PATH};
    use crate::session::MemoryStorage;
    use serde_json::json;

    fn test_app() -> (App, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let app = App::new(
            "http://test/api",
            Arc::new(MemoryStorage::new()),
            transport.clone(),
        );
        (app, transport)
    }

    #[tokio::test]
    async fn test_login_unlocks_guarded_routes() {
        let (mut app, transport) = test_app();

        let nav = app.router_mut().navigate(EXPENSES_PATH).unwrap();
        assert_eq!(nav.path(), LOGIN_PATH);

        transport.push_json(json!({"token": "abc", "username": "alice"}));
        app.auth().login("alice", "pw").await.unwrap();

        let nav = app.router_mut().navigate(EXPENSES_PATH).unwrap();
        assert_eq!(nav.view(), Some(View::ExpenseList));

        transport.push_json(json!([]));
        app.expenses().get_all().await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://test/api/expenses");
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));

        app.auth().logout();
        let nav = app.router_mut().navigate(EXPENSES_PATH).unwrap();
        assert_eq!(nav.path(), LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_services_share_session() {
        let (app, transport) = test_app();
        app.token_store().set("t9", "zed");

        transport.push_json(json!([]));
        app.persons().get_all().await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().header("Authorization"),
            Some("Bearer t9")
        );
        assert_eq!(app.client().base_url(), "http://test/api");
    }

    #[test]
    fn test_with_config_uses_base_url() {
        let mut config = Config::default();
        config.api.base_url = "http://elsewhere/api/".to_string();

        let app = App::with_config(
            &config,
            Arc::new(MemoryStorage::new()),
            Arc::new(RecordingTransport::new()),
        );
        assert_eq!(app.client().base_url(), "http://elsewhere/api");
    }
}
