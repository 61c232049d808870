//! # readiness
//!
//! A career-readiness assessment for prospective medical assistants.
//! Backend-agnostic.
//!
//! The assessment walks a fixed question bank (personality and interest
//! items, medical knowledge items and the six WISCAR dimensions), records one
//! answer per question and scores the answers into an [`AssessmentResult`].
//!
//! ## Usage
//!
//! ```rust
//! use readiness::{Agreement, Answer, Answers, Recommendation, score};
//!
//! let mut answers = Answers::new();
//! answers.insert("w1", Agreement::STRONGLY_AGREE);
//! answers.insert("w2", Agreement::STRONGLY_DISAGREE);
//! answers.insert("r1", Answer::Choice(1));
//!
//! let result = score(&answers);
//! assert_eq!(result.wiscar_scores.will, 100);
//! assert_eq!(result.wiscar_scores.real_world, 75);
//! assert_eq!(result.recommendation, Recommendation::No);
//! ```
//!
//! ## Running the wizard
//!
//! ```rust,ignore
//! use readiness::Wizard;
//!
//! let mut wizard = Wizard::new();
//! let result = wizard.run(backend)?;
//! println!("{}% overall", result.overall_score);
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `AssessmentBackend`:
//! - `readiness-dialoguer-wizard` - CLI prompts via dialoguer
//!
//! Results can be exported with `readiness-html-report`.

// Re-export all types from readiness-types
pub use readiness_types::*;

pub mod bank;
pub use bank::questionnaire;

mod result;
pub use result::{AssessmentResult, CareerMatch, Dimension, DimensionScores, Recommendation};

pub mod report;

mod scoring;
pub use scoring::{parse_tokens, score};

mod wizard;
pub use wizard::{AssessmentBackend, Step, Transition, Wizard};

// Scripted backend for running the wizard without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptedBackend, ScriptedBackendError};
