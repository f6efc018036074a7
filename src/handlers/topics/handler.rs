//! Topic handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    catalog::Direction,
    error::{AppError, AppResult},
    services::TopicService,
    state::AppState,
};

use super::{
    request::{CreateTopicRequest, UpdateTopicRequest},
    response::{TopicCategoriesResponse, TopicResponse, TopicsListResponse},
};

/// List all topics in display order
pub async fn list_topics(State(state): State<AppState>) -> AppResult<Json<TopicsListResponse>> {
    let topics = TopicService::list_topics(state.store()).await?;

    Ok(Json(TopicsListResponse {
        total: topics.len(),
        topics,
    }))
}

/// Create a new topic
pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<CreateTopicRequest>,
) -> AppResult<(StatusCode, Json<TopicResponse>)> {
    payload.validate()?;

    let topic = TopicService::create_topic(state.store(), payload).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// List the distinct topic categories
pub async fn list_topic_categories(
    State(state): State<AppState>,
) -> AppResult<Json<TopicCategoriesResponse>> {
    let categories = TopicService::list_categories(state.store()).await?;
    Ok(Json(TopicCategoriesResponse { categories }))
}

/// Get a specific topic
pub async fn get_topic(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<TopicResponse>> {
    let topic = TopicService::get_topic(state.store(), &name).await?;
    Ok(Json(topic))
}

/// Update a topic
pub async fn update_topic(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateTopicRequest>,
) -> AppResult<Json<TopicResponse>> {
    payload.validate()?;

    let topic = TopicService::update_topic(state.store(), &name, payload).await?;
    Ok(Json(topic))
}

/// Delete a topic
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    TopicService::delete_topic(state.store(), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a topic one position up or down
pub async fn move_topic(
    State(state): State<AppState>,
    Path((name, direction)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let direction = Direction::from_str(&direction)
        .ok_or_else(|| AppError::Validation("Direction must be 'up' or 'down'".to_string()))?;

    TopicService::move_topic(state.store(), &name, direction).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stream a topic's reference material
pub async fn view_topic_resource(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let files_dir = &state.config().storage.files_dir;
    let content = TopicService::open_resource(state.store(), files_dir, &name).await?;

    Ok(([(header::CONTENT_TYPE, content.content_type)], content.bytes))
}
