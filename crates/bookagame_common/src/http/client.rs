// --- File: crates/bookagame_common/src/http/client.rs ---
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Creates a new HTTP client for talking to the JSON API.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for every request
///
/// # Returns
///
/// A reqwest::Client that sends and accepts JSON by default
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .default_headers(headers)
        .user_agent(concat!("bookagame/", env!("CARGO_PKG_VERSION")))
        .build()
}
