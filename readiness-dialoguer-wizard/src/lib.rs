//! # readiness-dialoguer-wizard
//!
//! Dialoguer wizard backend for the readiness assessment.
//!
//! This crate presents the assessment in the terminal using the `dialoguer`
//! library: an introduction, then one select prompt per question with the
//! option to step back, then the results rendered as text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use readiness::Wizard;
//! use readiness_dialoguer_wizard::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = DialoguerBackend::new();
//!     let mut wizard = Wizard::new();
//!     let result = wizard.run(&backend)?;
//!     backend.show_results(result);
//!     Ok(())
//! }
//! ```

mod backend;
mod render;

pub use backend::{DialoguerBackend, DialoguerError};
pub use render::results_to_string;
