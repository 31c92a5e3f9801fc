use quizgen_core::{GenerateError, Quiz};

/// Bridge between the web layer and the core generation pipeline
///
/// The API key arrives from the page with each request; nothing server-side
/// stores it.
pub async fn generate(topic: &str, api_key: &str) -> Result<Quiz, GenerateError> {
    let config = super::config::get();
    quizgen_core::generate_quiz(topic, api_key, config).await
}
