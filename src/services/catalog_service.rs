use crate::dto::quiz_dto::QuizSummary;
use crate::error::{Error, Result};
use crate::models::quiz::QuizDefinition;
use crate::utils::validation::validate;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_QUIZZES: &str = include_str!("../data/quizzes.json");

/// Read-only set of quiz definitions, kept in load order.
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    quizzes: Vec<QuizDefinition>,
    index: HashMap<String, usize>,
}

impl QuizCatalog {
    pub fn from_definitions(quizzes: Vec<QuizDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(quizzes.len());

        for (pos, quiz) in quizzes.iter().enumerate() {
            validate(quiz)?;
            for (q_idx, question) in quiz.questions.iter().enumerate() {
                validate(question)?;
                if !question.has_option(question.correct_index) {
                    return Err(Error::InvalidCatalog(format!(
                        "Quiz '{}' question {} marks option {} as correct but only has {} options",
                        quiz.id,
                        q_idx + 1,
                        question.correct_index,
                        question.options.len()
                    )));
                }
            }
            if index.insert(quiz.id.clone(), pos).is_some() {
                return Err(Error::InvalidCatalog(format!(
                    "Duplicate quiz id '{}'",
                    quiz.id
                )));
            }
        }

        tracing::info!(quizzes = quizzes.len(), "Loaded quiz catalog");
        Ok(Self { quizzes, index })
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let quizzes: Vec<QuizDefinition> = serde_json::from_str(raw)?;
        Self::from_definitions(quizzes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_QUIZZES)
    }

    pub fn get(&self, quiz_id: &str) -> Result<&QuizDefinition> {
        self.index
            .get(quiz_id)
            .map(|&pos| &self.quizzes[pos])
            .ok_or_else(|| Error::NotFound(format!("Quiz with id '{}' does not exist", quiz_id)))
    }

    pub fn contains(&self, quiz_id: &str) -> bool {
        self.index.contains_key(quiz_id)
    }

    pub fn list(&self) -> Vec<(&str, &QuizDefinition)> {
        self.quizzes.iter().map(|q| (q.id.as_str(), q)).collect()
    }

    pub fn summaries(&self) -> Vec<QuizSummary> {
        self.quizzes.iter().map(QuizSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}
