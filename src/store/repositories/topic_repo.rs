//! Topic repository

use crate::{constants::documents, error::AppResult, models::Topic, store::JsonStore};

/// Repository for the topic document
pub struct TopicRepository;

impl TopicRepository {
    /// Load all topics
    pub async fn load(store: &JsonStore) -> AppResult<Vec<Topic>> {
        store.load(documents::TOPICS).await
    }

    /// Replace the topic document
    pub async fn save(store: &JsonStore, topics: &[Topic]) -> AppResult<()> {
        store.save(documents::TOPICS, topics).await
    }
}
