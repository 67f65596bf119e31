//! HTTP Transport
//!
//! The seam between request building and the network. Native builds send
//! through reqwest, the browser build through `fetch`, tests through a
//! recording double.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;

use super::error::{ClientError, ClientResult};

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL (base URL + path)
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl ApiRequest {
    /// Look up a header value (case-insensitive name)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response as received from the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

/// Sends built requests over the network
///
/// Implementations return `Ok` for every response the server produced,
/// whatever its status; status handling belongs to the client.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = ApiRequest {
            method: Method::Get,
            url: "http://localhost/api/expenses".to_string(),
            headers: vec![("Authorization".to_string(), "Bearer abc".to_string())],
            body: None,
        };

        assert_eq!(request.header("authorization"), Some("Bearer abc"));
        assert_eq!(request.header("Content-Type"), None);
    }

    #[test]
    fn test_response_decoding() {
        let response = ApiResponse::new(200, r#"{"a": 1.5}"#);
        assert!(response.is_success());

        let value: std::collections::HashMap<String, f64> = response.json().unwrap();
        assert_eq!(value["a"], 1.5);

        let bad = ApiResponse::new(200, "User registered successfully");
        assert!(matches!(
            bad.json::<serde_json::Value>(),
            Err(ClientError::Decode(_))
        ));
        assert_eq!(bad.text(), "User registered successfully");
    }

    #[test]
    fn test_status_ranges() {
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(301, "").is_success());
        assert!(!ApiResponse::new(401, "").is_success());
    }
}
