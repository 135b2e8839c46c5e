use crate::models::question::Question;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizDefinition {
    #[validate(length(min = 1, message = "Quiz id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Quiz title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "A quiz needs at least one question"))]
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }
}
