//! Shared HTTP client utilities
//!
//! This module provides a shared, lazily-initialized HTTP client for all API
//! calls. Using a single client allows connection pooling and avoids resource
//! duplication.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Default HTTP timeout for API requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Global HTTP client for chat completion calls
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// This client has a 60-second timeout, suitable for chat completions
/// that generate a full set of questions in one response.
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("quizgen/1.0")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
