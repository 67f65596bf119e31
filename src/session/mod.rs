//! Session Storage
//!
//! Persistent session state for the client.
//!
//! ## Architecture
//!
//! - **StorageBackend**: string key-value store (browser `localStorage`,
//!   a JSON file on disk, or memory)
//! - **TokenStore**: the `userToken` / `username` pair on top of a backend
//!
//! The token store is injected into the HTTP client and the router, so
//! tests never touch shared storage.

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{Session, TokenStore, USERNAME_KEY, USER_TOKEN_KEY};
