use serde::{Deserialize, Serialize};

/// Generated quiz content for a single topic
///
/// `questions` and `answers` are always present after parsing; the glossary
/// fields default to empty when the model omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<String>,
    pub answers: Vec<String>,

    // Glossary (optional in model output)
    #[serde(default)]
    pub technical_terms: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl Quiz {
    /// True when the model returned no usable Q/A content
    ///
    /// A quiz with questions but no answers (or vice versa) still counts as
    /// empty: there is nothing meaningful to enumerate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() || self.answers.is_empty()
    }

    /// True when the model returned unequal numbers of questions and answers
    #[must_use]
    pub fn has_mismatch(&self) -> bool {
        self.questions.len() != self.answers.len()
    }

    /// Question/answer pairs in model order
    ///
    /// When the lists have different lengths, the shorter side is padded with
    /// empty strings so no content is silently dropped.
    #[must_use]
    pub fn qa_pairs(&self) -> Vec<(String, String)> {
        pair_up(&self.questions, &self.answers)
    }

    /// Technical term / description pairs in model order
    #[must_use]
    pub fn term_pairs(&self) -> Vec<(String, String)> {
        pair_up(&self.technical_terms, &self.descriptions)
    }
}

/// Zips two lists into pairs, padding the shorter one with empty strings
fn pair_up(left: &[String], right: &[String]) -> Vec<(String, String)> {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| {
            (
                left.get(i).cloned().unwrap_or_default(),
                right.get(i).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_quiz_is_empty() {
        let quiz = Quiz::default();
        assert!(quiz.is_empty());
        assert!(quiz.qa_pairs().is_empty());
        assert!(quiz.term_pairs().is_empty());
    }

    #[test]
    fn quiz_missing_answers_is_empty() {
        let quiz = Quiz {
            questions: strings(&["What is ownership?"]),
            ..Default::default()
        };
        assert!(quiz.is_empty());
    }

    #[test]
    fn qa_pairs_preserve_order() {
        let quiz = Quiz {
            questions: strings(&["Q1?", "Q2?"]),
            answers: strings(&["A1.", "A2."]),
            ..Default::default()
        };
        assert!(!quiz.is_empty());
        assert!(!quiz.has_mismatch());
        assert_eq!(
            quiz.qa_pairs(),
            vec![
                ("Q1?".to_string(), "A1.".to_string()),
                ("Q2?".to_string(), "A2.".to_string()),
            ]
        );
    }

    #[test]
    fn mismatched_lists_pad_the_shorter_side() {
        let quiz = Quiz {
            questions: strings(&["Q1?", "Q2?", "Q3?"]),
            answers: strings(&["A1."]),
            ..Default::default()
        };
        assert!(quiz.has_mismatch());
        let pairs = quiz.qa_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("Q1?".to_string(), "A1.".to_string()));
        assert_eq!(pairs[1].1, "");
        assert_eq!(pairs[2].1, "");
    }

    #[test]
    fn term_pairs_default_to_empty() {
        let quiz = Quiz {
            questions: strings(&["Q1?"]),
            answers: strings(&["A1."]),
            ..Default::default()
        };
        assert!(quiz.term_pairs().is_empty());
    }

    #[test]
    fn quiz_deserializes_without_glossary_fields() {
        let quiz: Quiz =
            serde_json::from_str(r#"{"questions": ["Q1?"], "answers": ["A1."]}"#).unwrap();
        assert_eq!(quiz.questions, strings(&["Q1?"]));
        assert!(quiz.technical_terms.is_empty());
        assert!(quiz.descriptions.is_empty());
    }
}
