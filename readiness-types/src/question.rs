use crate::{AGREEMENT_LABELS, CONFIRM_LABELS, QuestionId};

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The identity of this question, used as its key in `Answers`.
    id: QuestionId,

    /// The prompt text shown to the user.
    ask: String,

    /// The kind of question (determines input type and the answer variant).
    kind: QuestionKind,

    /// Category label, used for display grouping.
    category: String,

    /// The psychometric framework this item belongs to, if any.
    framework: Option<String>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        ask: impl Into<String>,
        kind: QuestionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            ask: ask.into(),
            kind,
            category: category.into(),
            framework: None,
        }
    }

    /// Create a 5-point agreement question.
    pub fn agreement(
        id: impl Into<QuestionId>,
        ask: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(id, ask, QuestionKind::Agreement, category)
    }

    /// Create a single-choice question with the given options.
    pub fn choice<I, S>(
        id: impl Into<QuestionId>,
        ask: impl Into<String>,
        category: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            ask,
            QuestionKind::Choice(ChoiceQuestion::new(options)),
            category,
        )
    }

    /// Create a yes/no question.
    pub fn confirm(
        id: impl Into<QuestionId>,
        ask: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(id, ask, QuestionKind::Confirm, category)
    }

    /// Set the framework label.
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Get the question identity.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the framework label, if any.
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    /// The option labels a backend presents for this question, in answer order.
    pub fn option_labels(&self) -> Vec<&str> {
        self.kind.option_labels()
    }
}

/// The kind of question, determining input type and answer variant.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// 5-point agreement scale (strongly disagree .. strongly agree).
    Agreement,

    /// Choose exactly one of a list of options.
    Choice(ChoiceQuestion),

    /// Yes/no confirmation.
    Confirm,
}

impl QuestionKind {
    /// The option labels for this kind, in answer order.
    pub fn option_labels(&self) -> Vec<&str> {
        match self {
            Self::Agreement => AGREEMENT_LABELS.to_vec(),
            Self::Choice(choice) => choice.options.iter().map(String::as_str).collect(),
            Self::Confirm => CONFIRM_LABELS.to_vec(),
        }
    }

    /// Get the type name of this kind for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Agreement => "Agreement",
            Self::Choice(_) => "Choice",
            Self::Confirm => "Confirm",
        }
    }

    pub(crate) fn token_description(&self) -> &'static str {
        match self {
            Self::Agreement => "an agreement ordinal between 0 and 4",
            Self::Choice(_) => "an option index within range",
            Self::Confirm => "'true' or 'false'",
        }
    }
}

/// Configuration for a single-choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// The options, in presentation order. Answers refer to them by index.
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the options.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}
