//! Topic response DTOs

use serde::Serialize;

use crate::models::Topic;

/// Topic response
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub name: String,
    pub category: Option<String>,
    pub rank: i64,
    pub resource_path: Option<String>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            name: topic.name,
            category: topic.category,
            rank: topic.rank,
            resource_path: topic.resource_path,
        }
    }
}

/// Topic list response, in display (rank) order
#[derive(Debug, Serialize)]
pub struct TopicsListResponse {
    pub topics: Vec<TopicResponse>,
    pub total: usize,
}

/// Distinct topic categories (form support)
#[derive(Debug, Serialize)]
pub struct TopicCategoriesResponse {
    pub categories: Vec<String>,
}
