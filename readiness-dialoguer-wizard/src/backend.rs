//! Dialoguer backend implementation for the AssessmentBackend trait.

use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use readiness::{
    Answer, AnswerError, AssessmentBackend, AssessmentError, AssessmentResult, Question, Step,
    Wizard,
};
use thiserror::Error;
use tracing::debug;

use crate::render::results_to_string;

/// Menu entry appended after the options on every question but the first.
const PREVIOUS: &str = "<- Previous question";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the assessment (e.g., pressed Ctrl+C or Escape).
    #[error("Assessment cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The selected option could not be recorded.
    #[error("Answer rejected: {0}")]
    Answer(#[from] AnswerError),
}

impl From<DialoguerError> for AssessmentError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => AssessmentError::Cancelled,
            other => AssessmentError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// What the user picked on a question's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Previous,
    Answer(Answer),
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present questions
/// to the user in a command-line interface with colorful themes.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Print the results page.
    pub fn show_results(&self, result: &AssessmentResult) {
        println!();
        println!("{}", results_to_string(result));
    }

    /// Ask whether to take the assessment again.
    ///
    /// Escape counts as "no".
    pub fn offer_retake(&self) -> Result<bool, DialoguerError> {
        Ok(self
            .confirm("Retake the assessment?", false)?
            .unwrap_or(false))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>, DialoguerError> {
        let mut builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        builder = builder.with_prompt(prompt).default(default);

        match builder.interact_opt() {
            Ok(value) => Ok(value),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// Show the prelude and ask to begin. Declining cancels the assessment.
    fn introduce(&self, wizard: &Wizard) -> Result<(), DialoguerError> {
        print_step(Step::Introduction);
        if let Some(prelude) = &wizard.questionnaire().prelude {
            eprintln!("{prelude}");
            eprintln!();
        }

        match self.confirm("Start the assessment?", true)? {
            Some(true) => Ok(()),
            Some(false) | None => Err(DialoguerError::Cancelled),
        }
    }

    fn ask_question(
        &self,
        wizard: &Wizard,
        question: &Question,
    ) -> Result<Selection, DialoguerError> {
        let items = menu(question, !wizard.is_first());

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(question.ask()).items(&items);

        // Revisited questions start on the earlier answer.
        let default = wizard.current_answer().map_or(0, Answer::option_index);
        builder = builder.default(default);

        let index = match builder.interact_opt() {
            Ok(Some(index)) => index,
            Ok(None) => return Err(DialoguerError::Cancelled),
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };

        Ok(interpret(question, index)?)
    }
}

/// The entries of a question's select menu.
fn menu(question: &Question, allow_previous: bool) -> Vec<&str> {
    let mut items = question.option_labels();
    if allow_previous {
        items.push(PREVIOUS);
    }
    items
}

/// Map a menu index back to an answer, or to the "previous" entry.
fn interpret(question: &Question, index: usize) -> Result<Selection, AnswerError> {
    if index == question.option_labels().len() {
        return Ok(Selection::Previous);
    }
    Answer::from_option_index(question.kind(), index).map(Selection::Answer)
}

// The wizard's own text goes to stderr; stdout is left for results.

fn print_step(step: Step) {
    eprintln!("Step {} of {}", step.number(), Step::COUNT);
    eprintln!();
}

fn print_header(wizard: &Wizard, question: &Question) {
    eprintln!();
    eprintln!("{}", header(wizard.question_number(), wizard.total_questions()));
    match question.framework() {
        Some(framework) => eprintln!("{} | {framework}", question.category()),
        None => eprintln!("{}", question.category()),
    }
}

/// The "Question n of total" line, counting the question on screen as done.
fn header(number: usize, total: usize) -> String {
    let percent = if total == 0 {
        0
    } else {
        (number * 100 + total / 2) / total
    };
    format!("Question {number} of {total} ({percent}% complete)")
}

impl AssessmentBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error> {
        if wizard.step() == Step::Introduction {
            self.introduce(wizard)?;
            wizard.start();
            print_step(Step::Questions);
        }

        while wizard.step() == Step::Questions {
            let Some(question) = wizard.current_question() else {
                break;
            };
            print_header(wizard, question);

            match self.ask_question(wizard, question)? {
                Selection::Previous => {
                    debug!("stepping back");
                    wizard.previous();
                }
                Selection::Answer(answer) => {
                    wizard.record(answer)?;
                    wizard.next();
                }
            }
        }

        if let Some(epilogue) = &wizard.questionnaire().epilogue {
            eprintln!();
            eprintln!("{epilogue}");
        }
        print_step(Step::Results);

        Ok(())
    }
}
