/// Default chat model used when QUIZGEN_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base URL used when OPENAI_BASE_URL env var is not set
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration from environment
///
/// The API key is deliberately not part of the configuration: users supply
/// their own key with each request and it is never stored server-side.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from .env file and environment
    ///
    /// Every setting has a default, so this never fails.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let model = std::env::var("QUIZGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { model, base_url }
    }
}
