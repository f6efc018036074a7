//! Problem repository

use crate::{constants::documents, error::AppResult, models::Problem, store::JsonStore};

/// Repository for the problem document
pub struct ProblemRepository;

impl ProblemRepository {
    /// Load all problems in stored (insertion) order
    pub async fn load(store: &JsonStore) -> AppResult<Vec<Problem>> {
        store.load(documents::PROBLEMS).await
    }

    /// Replace the problem document
    pub async fn save(store: &JsonStore, problems: &[Problem]) -> AppResult<()> {
        store.save(documents::PROBLEMS, problems).await
    }
}
