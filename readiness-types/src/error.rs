use crate::QuestionId;

/// Error type for turning user input into an `Answer`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// The raw token could not be read as an answer for the question's kind.
    #[error("Malformed answer token '{token}': expected {expected}")]
    MalformedAnswerToken {
        token: String,
        expected: &'static str,
    },

    /// The questionnaire has no question with this identity.
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// Answers can only be recorded while a question is being asked.
    #[error("No question is being asked")]
    NoCurrentQuestion,

    /// A typed answer does not fit the question it was recorded for.
    #[error("Answer for '{question}' does not fit: expected {expected}, got {actual}")]
    KindMismatch {
        question: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Error type for running an assessment through a backend.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// User cancelled the assessment (Ctrl+C, Escape, declined to start, etc.)
    #[error("Assessment cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal errors, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl AssessmentError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
