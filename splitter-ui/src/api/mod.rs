//! Browser API Plumbing
//!
//! `localStorage` session backend, `fetch` transport and the backend URL.

mod storage;
mod transport;

pub use storage::LocalStorage;
pub use transport::FetchTransport;

use splitter::DEFAULT_API_BASE;

/// Local storage key overriding the backend URL
const API_URL_KEY: &str = "splitter_api_url";

/// Backend base URL: local storage override, then build-time
/// `SPLITTER_API_URL`, then the default
pub fn get_api_base() -> String {
    let url = storage::local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| {
            option_env!("SPLITTER_API_URL")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string()
        });

    url.trim_end_matches('/').to_string()
}
