//! Trivia questions and the validated, ordered set the quiz runs over.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Result};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    pub correct_option: usize,
    /// Shown after the answer is revealed.
    pub explanation: String,
    pub category: String,
}

impl Question {
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: [S; OPTION_COUNT],
        correct_option: usize,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option,
            explanation: String::new(),
            category: String::new(),
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Text of the right answer.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct_option)
            .map(String::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    fn validate(&self) -> Result<()> {
        if self.options.len() != OPTION_COUNT {
            return Err(ConfigError::InvalidQuestion {
                id: self.id.clone(),
                reason: format!("expected {} options, found {}", OPTION_COUNT, self.options.len()),
            });
        }
        if self.correct_option >= OPTION_COUNT {
            return Err(ConfigError::InvalidQuestion {
                id: self.id.clone(),
                reason: format!("correct option {} is out of range", self.correct_option),
            });
        }
        Ok(())
    }
}

/// Ordered, non-empty list of well-formed questions.
///
/// Order is quiz order. Once built the set is read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validate and wrap a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyQuestionList);
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self { questions })
    }

    /// Load a question list from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Question {
        Question::new(id, "Pick B", ["a", "b", "c", "d"], 1)
    }

    #[test]
    fn test_correct_text() {
        let q = sample("1").with_category("Test");
        assert_eq!(q.correct_text(), "b");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.category, "Test");
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(QuestionSet::new(vec![]), Err(ConfigError::EmptyQuestionList)));
    }

    #[test]
    fn test_bad_questions_rejected() {
        let mut short = sample("short");
        short.options.pop();
        let err = QuestionSet::new(vec![sample("ok"), short]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuestion { ref id, .. } if id == "short"));

        let mut out_of_range = sample("oor");
        out_of_range.correct_option = 4;
        assert!(QuestionSet::new(vec![out_of_range]).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "id": "1",
            "prompt": "2 + 2?",
            "options": ["3", "4", "5", "22"],
            "correct_option": 1,
            "explanation": "Arithmetic.",
            "category": "Math"
        }]"#;
        let set = QuestionSet::from_json(json).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().correct_text(), "4");
        assert!(set.get(1).is_none());
    }
}
