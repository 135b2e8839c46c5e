use crate::database::store::{LocalStore, QUIZ_RESULTS_KEY};
use crate::error::Result;
use crate::models::quiz_result::QuizResult;
use std::collections::HashMap;

/// Receives each completed quiz result once. Implementations only append.
#[cfg_attr(test, mockall::automock)]
pub trait ResultSink: Send + Sync {
    fn append(&self, result: &QuizResult) -> Result<()>;
}

type ResultsByRequester = HashMap<String, Vec<QuizResult>>;

#[derive(Debug, Clone)]
pub struct LocalResultStore {
    store: LocalStore,
}

impl LocalResultStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn results_for(&self, requester_id: &str) -> Result<Vec<QuizResult>> {
        let mut all: ResultsByRequester = self.store.get_or_default(QUIZ_RESULTS_KEY)?;
        Ok(all.remove(requester_id).unwrap_or_default())
    }
}

impl ResultSink for LocalResultStore {
    fn append(&self, result: &QuizResult) -> Result<()> {
        let mut all: ResultsByRequester = self.store.get_or_default(QUIZ_RESULTS_KEY)?;
        all.entry(result.requester_id.clone())
            .or_default()
            .push(result.clone());
        self.store.set(QUIZ_RESULTS_KEY, &all)?;

        tracing::debug!(
            requester_id = %result.requester_id,
            quiz_id = %result.quiz_id,
            "Stored quiz result"
        );
        Ok(())
    }
}
