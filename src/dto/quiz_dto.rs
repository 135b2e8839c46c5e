use serde::{Deserialize, Serialize};

use crate::models::question::{option_label, Question};
use crate::models::quiz::QuizDefinition;
use crate::models::quiz_result::QuizResult;

/// Menu entry for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_count: usize,
}

impl From<&QuizDefinition> for QuizSummary {
    fn from(quiz: &QuizDefinition) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            question_count: quiz.question_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionView {
    pub quiz_title: String,
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    pub fn new(quiz: &QuizDefinition, position: usize, question: &Question) -> Self {
        let total = quiz.question_count();
        let number = position + 1;
        let progress_percent = if total == 0 {
            0.0
        } else {
            (number as f64 / total as f64) * 100.0
        };

        Self {
            quiz_title: quiz.title.clone(),
            number,
            total,
            progress_percent,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| OptionView {
                    index,
                    label: option_label(index),
                    text: text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub quiz_id: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub band: String,
    pub message: String,
}

impl From<&QuizResult> for ResultView {
    fn from(result: &QuizResult) -> Self {
        let band = result.band();
        Self {
            quiz_id: result.quiz_id.clone(),
            score: result.score,
            total: result.total,
            percentage: result.percentage,
            band: band.label().to_string(),
            message: band.message().to_string(),
        }
    }
}
