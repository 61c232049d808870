use std::borrow::Borrow;
use std::fmt;

/// The identity of a question, e.g. `"p1"` or `"t7"`.
///
/// Used as keys in `Answers`. Identities are unique within a questionnaire.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new question identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the identity is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.id
    }
}
