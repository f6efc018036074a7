//! Contest and contest-category repository

use crate::{
    constants::documents,
    error::AppResult,
    models::{Contest, ContestCategory},
    store::JsonStore,
};

/// Repository for the contest and contest-category documents
pub struct ContestRepository;

impl ContestRepository {
    /// Load all contests
    pub async fn load(store: &JsonStore) -> AppResult<Vec<Contest>> {
        store.load(documents::CONTESTS).await
    }

    /// Replace the contest document
    pub async fn save(store: &JsonStore, contests: &[Contest]) -> AppResult<()> {
        store.save(documents::CONTESTS, contests).await
    }

    /// Load the stored category set (possibly stale; see the reconciler)
    pub async fn load_categories(store: &JsonStore) -> AppResult<Vec<ContestCategory>> {
        store.load(documents::CONTEST_CATEGORIES).await
    }

    /// Replace the contest-category document
    pub async fn save_categories(
        store: &JsonStore,
        categories: &[ContestCategory],
    ) -> AppResult<()> {
        store.save(documents::CONTEST_CATEGORIES, categories).await
    }
}
