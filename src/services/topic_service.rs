//! Topic service

use std::path::Path;

use crate::{
    catalog::{self, Direction},
    error::{AppError, AppResult},
    handlers::topics::{
        request::{CreateTopicRequest, UpdateTopicRequest},
        response::TopicResponse,
    },
    models::Topic,
    store::{JsonStore, repositories::TopicRepository},
    utils::{
        files::{FileContent, read_catalog_file},
        validation,
    },
};

/// Topic service for business logic
pub struct TopicService;

impl TopicService {
    /// List topics in display (rank) order
    pub async fn list_topics(store: &JsonStore) -> AppResult<Vec<TopicResponse>> {
        let mut topics = TopicRepository::load(store).await?;
        catalog::order_topics(&mut topics);

        Ok(topics.into_iter().map(TopicResponse::from).collect())
    }

    /// Get a topic by name
    pub async fn get_topic(store: &JsonStore, name: &str) -> AppResult<TopicResponse> {
        let topics = TopicRepository::load(store).await?;
        let topic = topics
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Topic '{name}' not found")))?;

        Ok(topic.into())
    }

    /// Distinct topic categories for the topic form
    pub async fn list_categories(store: &JsonStore) -> AppResult<Vec<String>> {
        let topics = TopicRepository::load(store).await?;
        Ok(catalog::distinct_topic_categories(&topics))
    }

    /// Create a new topic with the next available rank
    pub async fn create_topic(
        store: &JsonStore,
        payload: CreateTopicRequest,
    ) -> AppResult<TopicResponse> {
        let name = validation::normalize_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let category = validation::normalize_optional(payload.category.as_deref());
        let resource_path = Self::normalize_path(payload.resource_path.as_deref())?;

        let mut topics = TopicRepository::load(store).await?;
        if topics.iter().any(|t| t.name == name) {
            return Err(AppError::AlreadyExists(format!(
                "A topic named '{name}' already exists"
            )));
        }

        let topic = Topic {
            name,
            category,
            rank: catalog::next_rank(&topics),
            resource_path,
        };
        topics.push(topic.clone());
        TopicRepository::save(store, &topics).await?;

        tracing::info!(topic = %topic.name, rank = topic.rank, "Created topic");
        Ok(topic.into())
    }

    /// Update a topic, optionally renaming it
    pub async fn update_topic(
        store: &JsonStore,
        name: &str,
        payload: UpdateTopicRequest,
    ) -> AppResult<TopicResponse> {
        let mut topics = TopicRepository::load(store).await?;
        let idx = topics
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Topic '{name}' not found")))?;

        if let Some(new_name) = payload.name.as_deref() {
            let new_name = validation::normalize_name(new_name)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            if new_name != name && topics.iter().any(|t| t.name == new_name) {
                return Err(AppError::AlreadyExists(format!(
                    "A topic named '{new_name}' already exists"
                )));
            }
            topics[idx].name = new_name;
        }

        if let Some(category) = payload.category.as_deref() {
            topics[idx].category = validation::normalize_optional(Some(category));
        }

        if let Some(path) = payload.resource_path.as_deref() {
            topics[idx].resource_path = Self::normalize_path(Some(path))?;
        }

        let topic = topics[idx].clone();
        TopicRepository::save(store, &topics).await?;

        Ok(topic.into())
    }

    /// Delete a topic.
    ///
    /// Problems and courses referencing it keep their (now dangling)
    /// references.
    pub async fn delete_topic(store: &JsonStore, name: &str) -> AppResult<()> {
        let mut topics = TopicRepository::load(store).await?;
        let before = topics.len();
        topics.retain(|t| t.name != name);

        if topics.len() == before {
            return Err(AppError::NotFound(format!("Topic '{name}' not found")));
        }

        TopicRepository::save(store, &topics).await?;
        tracing::info!(topic = %name, "Deleted topic");
        Ok(())
    }

    /// Move a topic one position up or down; a move past either end is a
    /// no-op
    pub async fn move_topic(store: &JsonStore, name: &str, direction: Direction) -> AppResult<()> {
        let mut topics = TopicRepository::load(store).await?;
        catalog::order_topics(&mut topics);

        catalog::reorder_topic(&mut topics, name, direction)?;
        TopicRepository::save(store, &topics).await
    }

    /// Stream a topic's reference material
    pub async fn open_resource(
        store: &JsonStore,
        files_dir: &Path,
        name: &str,
    ) -> AppResult<FileContent> {
        let topics = TopicRepository::load(store).await?;
        let topic = topics
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Topic '{name}' not found")))?;

        let relative = topic
            .resource_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                AppError::NotFound(format!("Topic '{name}' has no resource file"))
            })?;

        read_catalog_file(files_dir, relative).await
    }

    fn normalize_path(path: Option<&str>) -> AppResult<Option<String>> {
        let Some(path) = validation::normalize_optional(path) else {
            return Ok(None);
        };
        validation::validate_relative_path(&path)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(Some(path))
    }
}
