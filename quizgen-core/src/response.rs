//! Parsing of model responses into [`Quiz`] values
//!
//! Models do not always return clean JSON: some wrap the payload in markdown
//! code fences, and the glossary fields are frequently omitted. Parsing is
//! tolerant of both, while enforcing the required shape with typed errors.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Quiz;

/// Why a model response could not be turned into a [`Quiz`]
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// The response text is not valid JSON at all
    #[error("model response is not valid JSON: {0}")]
    MalformedJson(String),

    /// The response is valid JSON but not the expected object layout
    #[error("model response has an unexpected shape: {0}")]
    UnexpectedShape(String),

    /// The top-level object lacks a required field
    #[error("model response is missing the required `{0}` field")]
    MissingField(&'static str),
}

/// Raw deserialization target before required fields are checked
///
/// `questions` and `answers` stay optional here so their absence maps to
/// [`ParseError::MissingField`] instead of a generic serde error.
#[derive(Deserialize)]
struct RawQuiz {
    questions: Option<Vec<String>>,
    answers: Option<Vec<String>>,
    #[serde(default)]
    technical_terms: Vec<String>,
    #[serde(default)]
    descriptions: Vec<String>,
}

/// Parse raw model output into a [`Quiz`]
///
/// Markdown code fences are stripped first, then the payload must be a JSON
/// object carrying `questions` and `answers` arrays. The glossary fields
/// (`technical_terms`, `descriptions`) default to empty when absent. Unknown
/// fields are ignored.
///
/// An empty-but-well-formed quiz still parses successfully: callers decide
/// how to surface [`Quiz::is_empty`].
pub fn parse_quiz(raw: &str) -> Result<Quiz, ParseError> {
    let cleaned = strip_markdown_json(raw);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    if !value.is_object() {
        return Err(ParseError::UnexpectedShape(format!(
            "expected a JSON object at the top level, got {}",
            json_type_name(&value)
        )));
    }

    let raw_quiz: RawQuiz = serde_json::from_value(value)
        .map_err(|e| ParseError::UnexpectedShape(e.to_string()))?;

    let questions = raw_quiz.questions.ok_or(ParseError::MissingField("questions"))?;
    let answers = raw_quiz.answers.ok_or(ParseError::MissingField("answers"))?;

    Ok(Quiz {
        questions,
        answers,
        technical_terms: raw_quiz.technical_terms,
        descriptions: raw_quiz.descriptions,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strip markdown code blocks from JSON response
///
/// Some models wrap their JSON responses in markdown code blocks like:
/// ```json
/// {"key": "value"}
/// ```
///
/// This function removes such wrappers and returns the clean JSON content.
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();

    // Handle ```json ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```json")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    // Handle ``` ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_json_with_json_block() {
        let input = r#"```json
{"questions": []}
```"#;
        assert_eq!(strip_markdown_json(input), r#"{"questions": []}"#);
    }

    #[test]
    fn test_strip_markdown_json_with_plain_block() {
        let input = r#"```
{"questions": []}
```"#;
        assert_eq!(strip_markdown_json(input), r#"{"questions": []}"#);
    }

    #[test]
    fn test_strip_markdown_json_no_block() {
        let input = r#"{"questions": []}"#;
        assert_eq!(strip_markdown_json(input), input);
    }

    #[test]
    fn test_strip_markdown_json_with_whitespace() {
        let input = r#"  ```json
{"questions": []}
```  "#;
        assert_eq!(strip_markdown_json(input), r#"{"questions": []}"#);
    }

    #[test]
    fn empty_input_is_malformed_json() {
        assert!(matches!(parse_quiz(""), Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn prose_input_is_malformed_json() {
        let result = parse_quiz("Sorry, I can't help with that.");
        assert!(matches!(result, Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn truncated_json_is_malformed() {
        let result = parse_quiz(r#"{"questions": ["Q1?"#);
        assert!(matches!(result, Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn top_level_array_is_unexpected_shape() {
        let result = parse_quiz(r#"["Q1?", "A1."]"#);
        match result {
            Err(ParseError::UnexpectedShape(detail)) => {
                assert!(detail.contains("an array"), "detail: {detail}");
            }
            other => panic!("expected UnexpectedShape, got {other:?}"),
        }
    }

    #[test]
    fn top_level_string_is_unexpected_shape() {
        let result = parse_quiz(r#""just a string""#);
        assert!(matches!(result, Err(ParseError::UnexpectedShape(_))));
    }

    #[test]
    fn wrongly_typed_questions_is_unexpected_shape() {
        let result = parse_quiz(r#"{"questions": "Q1?", "answers": ["A1."]}"#);
        assert!(matches!(result, Err(ParseError::UnexpectedShape(_))));
    }

    #[test]
    fn non_string_array_elements_are_unexpected_shape() {
        let result = parse_quiz(r#"{"questions": [1, 2], "answers": ["A1.", "A2."]}"#);
        assert!(matches!(result, Err(ParseError::UnexpectedShape(_))));
    }

    #[test]
    fn missing_questions_field_is_reported() {
        let result = parse_quiz(r#"{"answers": ["A1."]}"#);
        assert_eq!(result, Err(ParseError::MissingField("questions")));
    }

    #[test]
    fn missing_answers_field_is_reported() {
        let result = parse_quiz(r#"{"questions": ["Q1?"]}"#);
        assert_eq!(result, Err(ParseError::MissingField("answers")));
    }

    #[test]
    fn null_questions_field_counts_as_missing() {
        let result = parse_quiz(r#"{"questions": null, "answers": ["A1."]}"#);
        assert_eq!(result, Err(ParseError::MissingField("questions")));
    }

    #[test]
    fn full_payload_parses() {
        let raw = r#"{
            "questions": ["Q1?", "Q2?"],
            "answers": ["A1.", "A2."],
            "technical_terms": ["Term"],
            "descriptions": ["Desc"]
        }"#;
        let quiz = parse_quiz(raw).unwrap();
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.answers.len(), 2);
        assert_eq!(quiz.term_pairs(), vec![("Term".to_string(), "Desc".to_string())]);
    }

    #[test]
    fn glossary_fields_default_to_empty() {
        let quiz = parse_quiz(r#"{"questions": ["Q1?"], "answers": ["A1."]}"#).unwrap();
        assert!(quiz.technical_terms.is_empty());
        assert!(quiz.descriptions.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r#"{"questions": ["Q1?"], "answers": ["A1."], "model_notes": "extra"}"#;
        assert!(parse_quiz(raw).is_ok());
    }

    #[test]
    fn fenced_payload_parses() {
        let raw = r#"```json
{"questions": ["Q1?"], "answers": ["A1."]}
```"#;
        let quiz = parse_quiz(raw).unwrap();
        assert_eq!(quiz.questions, vec!["Q1?".to_string()]);
    }

    #[test]
    fn empty_lists_parse_but_report_empty() {
        let quiz = parse_quiz(r#"{"questions": [], "answers": []}"#).unwrap();
        assert!(quiz.is_empty());
    }

    #[test]
    fn error_messages_are_human_readable() {
        let err = parse_quiz(r#"[]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "model response has an unexpected shape: expected a JSON object at the top level, got an array"
        );

        let err = parse_quiz(r#"{"answers": []}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "model response is missing the required `questions` field"
        );
    }
}
