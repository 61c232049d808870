//! The wizard controller: introduction, one question at a time, results.

use tracing::{debug, info};

use crate::{
    Answer, AnswerError, Answers, AssessmentError, AssessmentResult, Question, Questionnaire,
    bank, score,
};

/// The three steps of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Introduction,
    Questions,
    Results,
}

impl Step {
    /// 1-based step number, as shown in a progress header.
    pub fn number(self) -> usize {
        match self {
            Self::Introduction => 1,
            Self::Questions => 2,
            Self::Results => 3,
        }
    }

    pub const COUNT: usize = 3;
}

/// What an event did to the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Left the introduction for the first question.
    Started,
    /// Moved to the question at this position.
    Moved(usize),
    /// Answered the last question; the result is available.
    Completed,
    /// The event did not apply in the current state.
    Stayed,
}

/// Trait for backend implementations that drive the wizard.
///
/// A backend presents the wizard's current state to the user and feeds their
/// events back (`start`, `record`, `next`, `previous`) until the wizard
/// reaches [`Step::Results`].
///
/// Backend errors convert into [`AssessmentError`]; a user quitting the
/// prompts must become [`AssessmentError::Cancelled`].
pub trait AssessmentBackend {
    /// The error type for this backend.
    type Error: Into<AssessmentError>;

    /// Drive `wizard` from its current step to the results.
    ///
    /// Returns on completion or on error/cancellation.
    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error>;
}

impl<B: AssessmentBackend + ?Sized> AssessmentBackend for &B {
    type Error = B::Error;

    fn drive(&self, wizard: &mut Wizard) -> Result<(), Self::Error> {
        (**self).drive(wizard)
    }
}

/// State of one assessment session.
///
/// Owns the questionnaire, the position within it and the answers recorded
/// so far. The result is computed once, when the last question is left.
#[derive(Debug, Clone)]
pub struct Wizard {
    questionnaire: Questionnaire,
    step: Step,
    cursor: usize,
    answers: Answers,
    result: Option<AssessmentResult>,
}

impl Wizard {
    /// A wizard over the built-in question bank.
    pub fn new() -> Self {
        Self::with_questionnaire(bank::questionnaire())
    }

    /// A wizard over a custom questionnaire.
    pub fn with_questionnaire(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            step: Step::Introduction,
            cursor: 0,
            answers: Answers::new(),
            result: None,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Position of the current question (0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The result of the last completed run, if in the results step.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// The question being asked, if in the questions step.
    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            Step::Questions => self.questionnaire.question(self.cursor),
            Step::Introduction | Step::Results => None,
        }
    }

    /// The answer already recorded for the current question.
    pub fn current_answer(&self) -> Option<&Answer> {
        self.current_question()
            .and_then(|q| self.answers.get(q.id().as_str()))
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questionnaire.len()
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.questionnaire.len()
    }

    /// Whether `next` would move on: only once the current question is answered.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Overall progress through the assessment, 0-100.
    pub fn progress(&self) -> u8 {
        match self.step {
            Step::Introduction => 0,
            Step::Questions => {
                let total = self.questionnaire.len().max(1);
                // cursor < total, so this stays below 100
                (self.cursor * 100 / total) as u8
            }
            Step::Results => 100,
        }
    }

    /// Leave the introduction for the first question.
    ///
    /// A questionnaire without questions goes straight to the results.
    pub fn start(&mut self) -> Transition {
        if self.step != Step::Introduction {
            return Transition::Stayed;
        }
        self.cursor = 0;
        if self.questionnaire.is_empty() {
            return self.complete();
        }
        self.step = Step::Questions;
        debug!(total = self.questionnaire.len(), "assessment started");
        Transition::Started
    }

    /// Record an answer for the current question, replacing any earlier one.
    pub fn record(&mut self, answer: Answer) -> Result<(), AnswerError> {
        let question = self.require_question()?;
        answer.check(question.id(), question.kind())?;
        let id = question.id().clone();
        debug!(question = %id, token = %answer.to_token(), "answer recorded");
        self.answers.insert(id, answer);
        Ok(())
    }

    /// Parse a raw token for the current question and record it.
    ///
    /// A malformed token is rejected and leaves any earlier answer in place.
    pub fn record_token(&mut self, token: &str) -> Result<(), AnswerError> {
        let question = self.require_question()?;
        let answer = Answer::parse(question.kind(), token)?;
        self.record(answer)
    }

    /// Move to the next question, or to the results after the last one.
    ///
    /// Does nothing while the current question is unanswered.
    pub fn next(&mut self) -> Transition {
        if self.step != Step::Questions || !self.can_advance() {
            return Transition::Stayed;
        }
        if self.is_last() {
            return self.complete();
        }
        self.cursor += 1;
        Transition::Moved(self.cursor)
    }

    /// Go back one question. Does nothing at the first question.
    pub fn previous(&mut self) -> Transition {
        if self.step != Step::Questions || self.is_first() {
            return Transition::Stayed;
        }
        self.cursor -= 1;
        Transition::Moved(self.cursor)
    }

    /// Discard all answers and any result, and return to the introduction.
    pub fn restart(&mut self) {
        debug!("assessment restarted");
        self.step = Step::Introduction;
        self.cursor = 0;
        self.answers.clear();
        self.result = None;
    }

    /// Run the wizard to completion with a backend.
    pub fn run<B: AssessmentBackend>(
        &mut self,
        backend: B,
    ) -> Result<&AssessmentResult, AssessmentError> {
        backend
            .drive(self)
            .map_err(Into::<AssessmentError>::into)?;
        // Backends may stop early without reporting an error.
        self.result.as_ref().ok_or(AssessmentError::Cancelled)
    }

    fn complete(&mut self) -> Transition {
        let result = score(&self.answers);
        info!(
            overall = result.overall_score,
            recommendation = %result.recommendation,
            "assessment completed"
        );
        self.result = Some(result);
        self.step = Step::Results;
        Transition::Completed
    }

    fn require_question(&self) -> Result<&Question, AnswerError> {
        self.current_question()
            .ok_or(AnswerError::NoCurrentQuestion)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
