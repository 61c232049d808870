//! Scripted backend for running assessments without user interaction.
//!
//! `ScriptedBackend` answers every question from a script prepared ahead of
//! time. This is useful for testing the wizard end to end.
//!
//! # Example
//!
//! ```rust
//! use readiness::{Recommendation, ScriptedBackend, Wizard};
//!
//! let backend = ScriptedBackend::all_tokens("2")
//!     .with_token("w2", "2")
//!     .with_token("t1", "1")
//!     .with_token("r1", "1");
//!
//! let mut wizard = Wizard::new();
//! let result = wizard.run(backend).unwrap();
//! assert_eq!(result.psychometric_score, 50);
//! assert_eq!(result.recommendation, Recommendation::No);
//! ```

use std::collections::HashMap;

use crate::{AnswerError, AssessmentBackend, AssessmentError, Step, Transition, Wizard};

/// A backend that answers from a prepared script of raw tokens.
///
/// Questions missing from the script make the run fail, unless a fallback
/// token has been set with [`ScriptedBackend::all_tokens`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    tokens: HashMap<String, String>,
    fallback: Option<String>,
    step_back_after: Option<String>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedBackendError {
    #[error("Missing scripted answer for question: {0}")]
    MissingAnswer(String),

    #[error("Scripted answer for '{question}' was rejected: {source}")]
    Rejected {
        question: String,
        #[source]
        source: AnswerError,
    },

    #[error("Wizard did not move past question '{0}'")]
    Stuck(String),
}

impl From<ScriptedBackendError> for AssessmentError {
    fn from(err: ScriptedBackendError) -> Self {
        AssessmentError::backend(err)
    }
}

impl ScriptedBackend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
            fallback: None,
            step_back_after: None,
        }
    }

    /// Create a script that answers every question with the same token.
    ///
    /// The fallback is only used for questions without their own token and
    /// it must be valid for them.
    pub fn all_tokens(token: impl Into<String>) -> Self {
        Self {
            fallback: Some(token.into()),
            ..Self::new()
        }
    }

    /// Add a raw answer token for a question.
    pub fn with_token(mut self, id: impl Into<String>, token: impl Into<String>) -> Self {
        self.tokens.insert(id.into(), token.into());
        self
    }

    /// Add several raw answer tokens at once.
    pub fn with_tokens<I, K, V>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tokens
            .extend(tokens.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Step back once after answering this question, then go forward again.
    ///
    /// Exercises the wizard's `previous` path in a scripted run.
    pub fn stepping_back_after(mut self, id: impl Into<String>) -> Self {
        self.step_back_after = Some(id.into());
        self
    }

    fn token_for(&self, id: &str) -> Option<&str> {
        self.tokens
            .get(id)
            .or(self.fallback.as_ref())
            .map(String::as_str)
    }
}

impl AssessmentBackend for ScriptedBackend {
    type Error = ScriptedBackendError;

    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error> {
        wizard.start();
        let mut stepped_back = false;

        while wizard.step() == Step::Questions {
            let Some(question) = wizard.current_question() else {
                break;
            };
            let id = question.id().as_str().to_string();

            if !wizard.can_advance() {
                let token = self
                    .token_for(&id)
                    .ok_or_else(|| ScriptedBackendError::MissingAnswer(id.clone()))?;
                wizard
                    .record_token(token)
                    .map_err(|source| ScriptedBackendError::Rejected {
                        question: id.clone(),
                        source,
                    })?;
            }

            if !stepped_back && self.step_back_after.as_deref() == Some(id.as_str()) {
                stepped_back = true;
                if wizard.previous() != Transition::Stayed {
                    // The earlier answer is kept, so the loop walks forward again.
                    continue;
                }
            }

            if wizard.next() == Transition::Stayed {
                return Err(ScriptedBackendError::Stuck(id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, Questionnaire};

    fn small() -> Questionnaire {
        Questionnaire::new(vec![
            Question::agreement("w1", "I finish what I begin.", "Will"),
            Question::confirm("y1", "Certified?", "Background"),
        ])
    }

    #[test]
    fn answers_every_question() {
        let mut wizard = Wizard::with_questionnaire(small());
        let backend = ScriptedBackend::new()
            .with_token("w1", "3")
            .with_token("y1", "true");

        backend.drive(&mut wizard).unwrap();
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.answers().get_confirm("y1").unwrap(), true);
    }

    #[test]
    fn missing_answer_fails() {
        let mut wizard = Wizard::with_questionnaire(small());
        let err = ScriptedBackend::new()
            .with_token("w1", "3")
            .drive(&mut wizard)
            .unwrap_err();
        assert!(matches!(err, ScriptedBackendError::MissingAnswer(id) if id == "y1"));
    }

    #[test]
    fn rejected_token_fails() {
        let mut wizard = Wizard::with_questionnaire(small());
        let err = ScriptedBackend::new()
            .with_tokens([("w1", "3"), ("y1", "maybe")])
            .drive(&mut wizard)
            .unwrap_err();
        assert!(matches!(err, ScriptedBackendError::Rejected { .. }));
    }

    #[test]
    fn script_errors_are_backend_failures() {
        let err = AssessmentError::from(ScriptedBackendError::MissingAnswer("p2".to_string()));
        assert!(!err.is_cancelled());
        assert_eq!(
            err.to_string(),
            "Backend error: Missing scripted answer for question: p2"
        );
    }

    #[test]
    fn stepping_back_keeps_answers() {
        let mut wizard = Wizard::with_questionnaire(small());
        ScriptedBackend::new()
            .with_tokens([("w1", "3"), ("y1", "false")])
            .stepping_back_after("y1")
            .drive(&mut wizard)
            .unwrap();
        assert_eq!(wizard.step(), Step::Results);
        assert_eq!(wizard.answers().len(), 2);
    }
}
