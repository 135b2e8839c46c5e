use crate::database::store::{LocalStore, EXPERIENCES_KEY};
use crate::dto::experience_dto::{CreateExperienceRequest, ExperienceView};
use crate::error::{Error, Result};
use crate::models::experience::Experience;
use crate::models::user::User;
use crate::utils::time;
use uuid::Uuid;

const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone)]
pub struct ExperienceService {
    store: LocalStore,
}

impl ExperienceService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn submit(&self, author: Option<&User>, req: CreateExperienceRequest) -> Result<Experience> {
        let author = author.ok_or_else(|| {
            Error::AuthenticationRequired("Please log in to share your experience".to_string())
        })?;

        let content = req.content.trim();
        if content.is_empty() {
            return Err(Error::InvalidArgument(
                "Please write your experience before submitting".to_string(),
            ));
        }

        let experience = Experience {
            id: Uuid::new_v4(),
            user_id: author.id,
            user_name: author.name.clone(),
            content: content.to_string(),
            timestamp: time::now(),
            anonymous: req.anonymous,
        };

        let mut all: Vec<Experience> = self.store.get_or_default(EXPERIENCES_KEY)?;
        all.push(experience.clone());
        self.store.set(EXPERIENCES_KEY, &all)?;

        tracing::info!(
            experience_id = %experience.id,
            anonymous = experience.anonymous,
            "Experience shared"
        );
        Ok(experience)
    }

    /// Newest first.
    pub fn list(&self) -> Result<Vec<ExperienceView>> {
        let mut all: Vec<Experience> = self.store.get_or_default(EXPERIENCES_KEY)?;
        all.reverse();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(all
            .into_iter()
            .map(|exp| ExperienceView {
                id: exp.id,
                author: if exp.anonymous {
                    ANONYMOUS_AUTHOR.to_string()
                } else {
                    exp.user_name
                },
                date: time::format_display(exp.timestamp),
                content: exp.content,
            })
            .collect())
    }
}
