//! Prompt construction for quiz generation
//!
//! Every request is the same two-message exchange: a fixed system instruction
//! describing the task and output format, followed by the user's topic.

use crate::openai::Message;

/// Number of questions the model is asked to generate per topic
pub const QUESTION_COUNT: usize = 10;

/// Fixed system instruction sent with every topic
///
/// The key names listed here must match what [`crate::response::parse_quiz`]
/// extracts; a test below keeps them in sync.
pub const SYSTEM_PROMPT: &str = r#"You are an AI assistant capable of generating a list of questions based on a topic.
You will receive a random topic. Your task is to:
1. Generate 10 questions about that topic.
2. Generate answers for all questions in a separate list.
3. Extract technical terms (e.g., important keywords, domain-specific terms, or capitalized words) from the questions and answers.
4. For each technical term, provide a brief description or explanation.

Return the result as a single JSON object with four keys:
- "questions": a JSON array of the questions.
- "answers": a JSON array of the answers, one per question.
- "technical_terms": a JSON array of the technical terms.
- "descriptions": a JSON array of descriptions, one per technical term.

Return only the JSON object."#;

/// Build the message exchange for a quiz request
#[must_use]
pub fn build_messages(topic: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(topic)]
}
