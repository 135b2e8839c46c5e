use crate::models::question::Question;
use serde::{Deserialize, Serialize};

pub struct GradingService;

impl GradingService {
    /// Counts answers matching the correct option of the question at the same
    /// position. Unanswered, missing or out-of-range entries count as wrong.
    pub fn score(questions: &[Question], answers: &[Option<usize>]) -> u32 {
        questions
            .iter()
            .enumerate()
            .filter(|(idx, q)| match answers.get(*idx).copied().flatten() {
                Some(given) => q.has_option(given) && q.is_correct(given),
                None => false,
            })
            .count() as u32
    }

    /// `round(100 * score / total)` with halves rounded up.
    pub fn percentage(score: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        let score = u64::from(score);
        let total = u64::from(total);
        ((200 * score + total) / (2 * total)) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Strong,
    Moderate,
    NeedsReview,
}

impl Band {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Band::Strong
        } else if percentage >= 60 {
            Band::Moderate
        } else {
            Band::NeedsReview
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Strong => "strong",
            Band::Moderate => "moderate",
            Band::NeedsReview => "needs review",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Band::Strong => "Excellent work! You have a strong understanding of the topic.",
            Band::Moderate => "Good job! Consider reviewing the material to strengthen your knowledge.",
            Band::NeedsReview => "Keep learning! Review the resources and try again.",
        }
    }
}
