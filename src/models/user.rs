use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account. Credentials are stored as given; this is a prototype
/// login, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Identity handed to quiz sessions and result records.
    pub fn requester_id(&self) -> String {
        self.id.to_string()
    }
}
