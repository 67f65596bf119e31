//! Person Service

use super::resource::{Resource, ResourceService};
use crate::models::{Person, PersonRequest};

impl Resource for Person {
    const PATH: &'static str = "/persons";
    type Request = PersonRequest;
}

/// CRUD over `/persons`
pub type PersonService = ResourceService<Person>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::RecordingTransport;
    use crate::http::{ApiClient, ApiResponse, Method};
    use crate::session::TokenStore;
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (PersonService, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::new("http://test/api", TokenStore::in_memory(), transport.clone());
        (PersonService::new(client), transport)
    }

    #[tokio::test]
    async fn test_crud_paths() {
        let (service, transport) = setup();
        let alice = json!({"id": "p1", "name": "Alice", "email": "alice@example.com"});
        let request = PersonRequest::new("Alice", "alice@example.com");

        transport.push_json(json!([alice.clone()]));
        transport.push_json(alice.clone());
        transport.push_response(ApiResponse::new(201, alice.to_string()));
        transport.push_json(alice.clone());
        transport.push_response(ApiResponse::new(204, ""));

        let all = service.get_all().await.unwrap();
        assert_eq!(all[0].name, "Alice");
        service.get_by_id("p1").await.unwrap();
        service.create(&request).await.unwrap();
        service.update("p1", &request).await.unwrap();
        service.delete("p1").await.unwrap();

        let calls: Vec<(Method, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();

        assert_eq!(
            calls,
            vec![
                (Method::Get, "http://test/api/persons".to_string()),
                (Method::Get, "http://test/api/persons/p1".to_string()),
                (Method::Post, "http://test/api/persons".to_string()),
                (Method::Put, "http://test/api/persons/p1".to_string()),
                (Method::Delete, "http://test/api/persons/p1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_authorization_without_session() {
        let (service, transport) = setup();
        transport.push_json(json!([]));

        let all = service.get_all().await.unwrap();
        assert!(all.is_empty());
        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_create_body() {
        let (service, transport) = setup();
        transport.push_json(json!({"id": "p2", "name": "Bob", "email": "bob@example.com"}));

        let person = service
            .create(&PersonRequest::new("Bob", "bob@example.com"))
            .await
            .unwrap();
        assert_eq!(person.id, "p2");

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body, json!({"name": "Bob", "email": "bob@example.com"}));
    }
}
