//! Quiz generation pipeline
//!
//! Validates the user's input, sends the fixed prompt exchange to the chat
//! completions API and parses the reply into a [`Quiz`]. The user's API key
//! is passed through per call and never stored or logged.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::Quiz;
use crate::openai::{ChatRequest, chat_completion};
use crate::prompt::build_messages;
use crate::response::{ParseError, parse_quiz};

/// Maximum allowed topic length to prevent abuse
pub const MAX_TOPIC_LENGTH: usize = 1000;

/// Temperature for LLM sampling
const TEMPERATURE: f32 = 0.7;

/// Maximum tokens for the generated quiz (ten Q/A pairs plus glossary)
const MAX_COMPLETION_TOKENS: u32 = 3000;

/// Why a quiz request failed
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No API key was provided; nothing was sent over the network
    #[error("no API key provided")]
    MissingApiKey,

    #[error("topic cannot be empty")]
    EmptyTopic,

    #[error("topic too long: {length} characters (max {max})")]
    TopicTooLong { length: usize, max: usize },

    /// The request failed: network trouble, an error status, or empty choices
    #[error("{0}")]
    Api(String),

    /// The model responded but the payload was unusable
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Generate a quiz for the given topic
///
/// The API key is checked before anything else: without one, no network
/// request is made at all. An empty quiz is not an error here; callers
/// surface [`Quiz::is_empty`] as a warning.
pub async fn generate_quiz(
    topic: &str,
    api_key: &str,
    config: &Config,
) -> Result<Quiz, GenerateError> {
    if api_key.trim().is_empty() {
        return Err(GenerateError::MissingApiKey);
    }

    let topic = topic.trim();
    if topic.is_empty() {
        return Err(GenerateError::EmptyTopic);
    }
    if topic.len() > MAX_TOPIC_LENGTH {
        return Err(GenerateError::TopicTooLong {
            length: topic.len(),
            max: MAX_TOPIC_LENGTH,
        });
    }

    let request = ChatRequest::new(config.model.as_str(), build_messages(topic))
        .temperature(TEMPERATURE)
        .max_tokens(MAX_COMPLETION_TOKENS)
        .json_format();

    let start = Instant::now();
    let response = chat_completion(&request, api_key, &config.base_url)
        .await
        .map_err(|e| GenerateError::Api(format!("{:#}", e)))?;
    let duration_ms = start.elapsed().as_millis();

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "token usage"
        );
    }

    let content = response
        .content_or_err()
        .map_err(|e| GenerateError::Api(format!("{:#}", e)))?;

    let quiz = parse_quiz(content)?;

    info!(
        model = %config.model,
        questions = quiz.questions.len(),
        duration_ms = %duration_ms,
        "quiz generated"
    );

    if quiz.is_empty() {
        warn!("model returned no questions or answers");
    } else if quiz.has_mismatch() {
        warn!(
            questions = quiz.questions.len(),
            answers = quiz.answers.len(),
            "question/answer count mismatch"
        );
    }
    if quiz.technical_terms.len() != quiz.descriptions.len() {
        warn!(
            terms = quiz.technical_terms.len(),
            descriptions = quiz.descriptions.len(),
            "technical term/description count mismatch"
        );
    }

    Ok(quiz)
}
