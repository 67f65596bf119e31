//! HTTP Client
//!
//! Request building, bearer-token injection and the transport seam.
//!
//! ## Data Flow
//!
//! 1. A service asks [`ApiClient`] for `GET /expenses`
//! 2. The client builds an [`ApiRequest`], reading the token store once
//! 3. An [`HttpTransport`] performs the exchange
//! 4. Non-2xx responses come back as [`ClientError::Status`]

mod client;
mod error;
mod transport;

#[cfg(feature = "native")]
mod native;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::{ClientError, ClientResult};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};

#[cfg(feature = "native")]
pub use native::ReqwestTransport;
