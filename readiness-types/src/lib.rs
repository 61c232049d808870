//! Core types for the readiness crate.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `Questionnaire` - The ordered question bank with its prelude and epilogue
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `Answer` and `Agreement` - A recorded answer, tagged by question kind
//! - `Answers` and `QuestionId` - The answer mapping and its keys

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::{AGREEMENT_LABELS, Agreement, Answer, CONFIRM_LABELS};

mod answers;
pub use answers::{AnswerLookupError, Answers};

mod question;
pub use question::{ChoiceQuestion, Question, QuestionKind};

mod questionnaire;
pub use questionnaire::Questionnaire;

mod error;
pub use error::{AnswerError, AssessmentError};
