use std::collections::HashMap;

use crate::{Agreement, Answer, QuestionId};

/// Error type for typed answer access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerLookupError {
    #[error("Missing answer for question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Type mismatch at question '{question}': expected {expected}, got {actual}")]
    TypeMismatch {
        question: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers recorded during an assessment, keyed by question identity.
///
/// Only questions the user has reached have an entry. Readers decide what a
/// missing entry means; the scoring rules treat it as a zero contribution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<QuestionId, Answer>,
}

impl Answers {
    /// Create a new empty answer mapping.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record an answer, replacing any earlier answer for the same question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: impl Into<Answer>) {
        self.values.insert(id.into(), answer.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Forget every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Typed accessors ===

    /// Get an agreement answer.
    pub fn get_agreement(&self, id: &str) -> Result<Agreement, AnswerLookupError> {
        match self.get(id) {
            Some(Answer::Agreement(agreement)) => Ok(*agreement),
            Some(other) => Err(mismatch(id, "Agreement", other)),
            None => Err(AnswerLookupError::MissingAnswer(QuestionId::new(id))),
        }
    }

    /// Get a chosen option index.
    pub fn get_choice(&self, id: &str) -> Result<usize, AnswerLookupError> {
        match self.get(id) {
            Some(Answer::Choice(index)) => Ok(*index),
            Some(other) => Err(mismatch(id, "Choice", other)),
            None => Err(AnswerLookupError::MissingAnswer(QuestionId::new(id))),
        }
    }

    /// Get a yes/no answer.
    pub fn get_confirm(&self, id: &str) -> Result<bool, AnswerLookupError> {
        match self.get(id) {
            Some(Answer::Confirm(value)) => Ok(*value),
            Some(other) => Err(mismatch(id, "Confirm", other)),
            None => Err(AnswerLookupError::MissingAnswer(QuestionId::new(id))),
        }
    }

    /// Export every answer as a raw token, sorted by question identity.
    pub fn to_tokens(&self) -> Vec<(QuestionId, String)> {
        let mut tokens: Vec<_> = self
            .values
            .iter()
            .map(|(id, answer)| (id.clone(), answer.to_token()))
            .collect();
        tokens.sort();
        tokens
    }
}

fn mismatch(id: &str, expected: &'static str, actual: &Answer) -> AnswerLookupError {
    AnswerLookupError::TypeMismatch {
        question: QuestionId::new(id),
        expected,
        actual: actual.type_name(),
    }
}

impl FromIterator<(QuestionId, Answer)> for Answers {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("p1", Agreement::STRONGLY_AGREE);
        answers.insert("t1", Answer::Choice(1));

        assert_eq!(answers.get_agreement("p1").unwrap().ordinal(), 4);
        assert_eq!(answers.get_choice("t1").unwrap(), 1);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn insert_overwrites() {
        let mut answers = Answers::new();
        answers.insert("t1", Answer::Choice(0));
        answers.insert("t1", Answer::Choice(3));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get_choice("t1").unwrap(), 3);
    }

    #[test]
    fn missing_answer_error() {
        let answers = Answers::new();
        assert_eq!(
            answers.get_agreement("w1"),
            Err(AnswerLookupError::MissingAnswer(QuestionId::new("w1")))
        );
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("r1", Answer::Choice(1));

        let result = answers.get_agreement("r1");
        assert!(matches!(
            result,
            Err(AnswerLookupError::TypeMismatch {
                expected: "Agreement",
                actual: "Choice",
                ..
            })
        ));
    }

    #[test]
    fn tokens_are_sorted_by_id() {
        let mut answers = Answers::new();
        answers.insert("w2", Agreement::STRONGLY_DISAGREE);
        answers.insert("a1", Answer::Confirm(true));

        let tokens = answers.to_tokens();
        assert_eq!(tokens[0], (QuestionId::new("a1"), "true".to_string()));
        assert_eq!(tokens[1], (QuestionId::new("w2"), "0".to_string()));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut answers = Answers::new();
        answers.insert("p1", Agreement::STRONGLY_AGREE);
        answers.clear();
        assert!(answers.is_empty());
        assert!(!answers.contains("p1"));
    }
}
