use crate::services::grading_service::Band;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz_id: String,
    pub requester_id: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn band(&self) -> Band {
        Band::from_percentage(self.percentage)
    }
}
