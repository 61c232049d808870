//! # readiness-html-report
//!
//! Renders an [`AssessmentResult`](readiness::AssessmentResult) as a
//! standalone HTML report, suitable for saving and sharing.
//!
//! ## Example
//!
//! ```rust
//! use readiness::{Answers, score};
//! use readiness_html_report::{ReportOptions, to_html_with_options};
//!
//! let result = score(&Answers::new());
//! let html = to_html_with_options(&result, ReportOptions::new().with_title("My Results"));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Alternative Paths Suggested"));
//! ```

mod generator;

pub use generator::{ReportOptions, to_html, to_html_with_options};
