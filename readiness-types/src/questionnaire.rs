use crate::{Answer, AnswerError, Question, QuestionId};

/// The ordered question bank together with the texts shown around it.
///
/// A questionnaire is presentation-agnostic. It can be walked by an
/// interactive wizard, listed, or used to read answers given as raw tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    /// Optional message shown before the first question.
    pub prelude: Option<String>,

    /// All questions, in the order they are asked.
    pub questions: Vec<Question>,

    /// Optional message shown after the last question.
    pub epilogue: Option<String>,
}

impl Questionnaire {
    /// Create a new questionnaire with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Create an empty questionnaire.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at a position.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by identity.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    /// Get the position of a question by identity.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id().as_str() == id)
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Read a raw answer token for the question with the given identity.
    pub fn parse_answer(&self, id: &str, token: &str) -> Result<(QuestionId, Answer), AnswerError> {
        let question = self
            .get(id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.to_string()))?;
        let answer = Answer::parse(question.kind(), token)?;
        Ok((question.id().clone(), answer))
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Questionnaire {
        Questionnaire::new(vec![
            Question::agreement("p1", "I follow procedures.", "Personality"),
            Question::choice("t1", "Hypertension means?", "Medical Knowledge", ["low", "high"]),
            Question::confirm("y1", "Certified?", "Background"),
        ])
    }

    #[test]
    fn lookup_by_id_and_position() {
        let questionnaire = sample();
        assert_eq!(questionnaire.len(), 3);
        assert_eq!(questionnaire.position("t1"), Some(1));
        assert_eq!(questionnaire.get("y1").map(Question::ask), Some("Certified?"));
        assert!(questionnaire.get("zz").is_none());
    }

    #[test]
    fn parse_answer_uses_question_kind() {
        let questionnaire = sample();
        let (id, answer) = questionnaire.parse_answer("t1", "1").unwrap();
        assert_eq!(id.as_str(), "t1");
        assert_eq!(answer, Answer::Choice(1));

        assert_eq!(
            questionnaire.parse_answer("y1", "false").unwrap().1,
            Answer::Confirm(false)
        );
    }

    #[test]
    fn parse_answer_rejects_unknown_and_malformed() {
        let questionnaire = sample();
        assert_eq!(
            questionnaire.parse_answer("x9", "1"),
            Err(AnswerError::UnknownQuestion("x9".to_string()))
        );
        assert!(matches!(
            questionnaire.parse_answer("t1", "2"),
            Err(AnswerError::MalformedAnswerToken { .. })
        ));
    }
}
