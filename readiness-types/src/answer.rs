use std::fmt;

use crate::{AnswerError, QuestionId, QuestionKind};

/// Labels for the five points of the agreement scale, indexed by ordinal.
pub const AGREEMENT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Labels for a yes/no question, in presentation order (yes first).
pub const CONFIRM_LABELS: [&str; 2] = ["Yes", "No"];

/// A point on the 5-point agreement scale (0 = strongly disagree, 4 = strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Agreement(u8);

impl Agreement {
    /// The highest ordinal on the scale.
    pub const MAX: u8 = 4;

    pub const STRONGLY_DISAGREE: Self = Self(0);
    pub const STRONGLY_AGREE: Self = Self(Self::MAX);

    /// Create an agreement from its ordinal, rejecting anything above [`Agreement::MAX`].
    pub fn new(ordinal: u8) -> Result<Self, AnswerError> {
        if ordinal > Self::MAX {
            return Err(AnswerError::MalformedAnswerToken {
                token: ordinal.to_string(),
                expected: "an agreement ordinal between 0 and 4",
            });
        }
        Ok(Self(ordinal))
    }

    /// The raw ordinal (0..=4).
    pub fn ordinal(self) -> u8 {
        self.0
    }

    /// The ordinal normalized onto a 0-100 scale.
    pub fn score(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX) * 100.0
    }

    /// The human-readable label for this point on the scale.
    pub fn label(self) -> &'static str {
        AGREEMENT_LABELS[usize::from(self.0)]
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded answer.
///
/// The variant is decided when the answer is recorded, based on the kind of
/// the question being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A point on the agreement scale (from Agreement questions).
    Agreement(Agreement),

    /// The 0-based index of the chosen option (from Choice questions).
    Choice(usize),

    /// A yes/no answer (from Confirm questions).
    Confirm(bool),
}

impl Answer {
    /// Parse a raw answer token for a question of the given kind.
    ///
    /// Tokens are `"0".."4"` for agreement questions, a 0-based option index
    /// for choice questions and `"true"`/`"false"` for confirm questions.
    pub fn parse(kind: &QuestionKind, token: &str) -> Result<Self, AnswerError> {
        let trimmed = token.trim();
        match kind {
            QuestionKind::Agreement => {
                let ordinal = trimmed.parse::<u8>().map_err(|_| malformed(token, kind))?;
                Agreement::new(ordinal)
                    .map(Self::Agreement)
                    .map_err(|_| malformed(token, kind))
            }
            QuestionKind::Choice(choice) => match trimmed.parse::<usize>() {
                Ok(index) if index < choice.options.len() => Ok(Self::Choice(index)),
                _ => Err(malformed(token, kind)),
            },
            QuestionKind::Confirm => match trimmed {
                "true" => Ok(Self::Confirm(true)),
                "false" => Ok(Self::Confirm(false)),
                _ => Err(malformed(token, kind)),
            },
        }
    }

    /// Build the answer for the option a backend presented at `index`.
    ///
    /// The inverse of [`Answer::option_index`].
    pub fn from_option_index(kind: &QuestionKind, index: usize) -> Result<Self, AnswerError> {
        let answer = match kind {
            QuestionKind::Agreement => {
                let ordinal = u8::try_from(index).map_err(|_| malformed(&index.to_string(), kind))?;
                Self::Agreement(Agreement::new(ordinal)?)
            }
            QuestionKind::Choice(_) => Self::Choice(index),
            QuestionKind::Confirm if index < CONFIRM_LABELS.len() => Self::Confirm(index == 0),
            QuestionKind::Confirm => return Err(malformed(&index.to_string(), kind)),
        };
        if answer.fits(kind) {
            Ok(answer)
        } else {
            Err(malformed(&index.to_string(), kind))
        }
    }

    /// Encode this answer back into its raw token form.
    pub fn to_token(&self) -> String {
        match self {
            Self::Agreement(agreement) => agreement.ordinal().to_string(),
            Self::Choice(index) => index.to_string(),
            Self::Confirm(value) => value.to_string(),
        }
    }

    /// Check whether this answer is valid for a question of the given kind.
    pub fn fits(&self, kind: &QuestionKind) -> bool {
        match (self, kind) {
            (Self::Agreement(_), QuestionKind::Agreement) => true,
            (Self::Choice(index), QuestionKind::Choice(choice)) => *index < choice.options.len(),
            (Self::Confirm(_), QuestionKind::Confirm) => true,
            _ => false,
        }
    }

    /// Check this answer against the question it is recorded for.
    ///
    /// A different kind of answer is a `KindMismatch`; the right kind with an
    /// option index past the end is a malformed token.
    pub fn check(&self, question: &QuestionId, kind: &QuestionKind) -> Result<(), AnswerError> {
        if self.fits(kind) {
            return Ok(());
        }
        if self.type_name() == kind.type_name() {
            return Err(malformed(&self.to_token(), kind));
        }
        Err(AnswerError::KindMismatch {
            question: question.clone(),
            expected: kind.type_name(),
            actual: self.type_name(),
        })
    }

    /// The index of this answer among the options a backend presents for it.
    ///
    /// Confirm answers are presented as `["Yes", "No"]`.
    pub fn option_index(&self) -> usize {
        match self {
            Self::Agreement(agreement) => usize::from(agreement.ordinal()),
            Self::Choice(index) => *index,
            Self::Confirm(true) => 0,
            Self::Confirm(false) => 1,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Agreement(_) => "Agreement",
            Self::Choice(_) => "Choice",
            Self::Confirm(_) => "Confirm",
        }
    }
}

impl From<Agreement> for Answer {
    fn from(agreement: Agreement) -> Self {
        Self::Agreement(agreement)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Confirm(value)
    }
}

fn malformed(token: &str, kind: &QuestionKind) -> AnswerError {
    AnswerError::MalformedAnswerToken {
        token: token.to_string(),
        expected: kind.token_description(),
    }
}
