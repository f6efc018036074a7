//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    catalog::Direction,
    error::{AppError, AppResult},
    services::ContestService,
    state::AppState,
};

use super::{
    request::{CreateContestRequest, UpdateContestRequest},
    response::{ContestCategoriesResponse, ContestResponse, ContestsListResponse},
};

/// List all contests grouped per category
pub async fn list_contests(
    State(state): State<AppState>,
) -> AppResult<Json<ContestsListResponse>> {
    let groups = ContestService::list_contests(state.store()).await?;
    let total = groups.iter().map(|g| g.contests.len()).sum();

    Ok(Json(ContestsListResponse { groups, total }))
}

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.store(), payload).await?;
    Ok((StatusCode::CREATED, Json(contest)))
}

/// List the reconciled contest categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ContestCategoriesResponse>> {
    let categories = ContestService::list_categories(state.store()).await?;
    Ok(Json(ContestCategoriesResponse { categories }))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.store(), &name).await?;
    Ok(Json(contest))
}

/// Update a contest
pub async fn update_contest(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    payload.validate()?;

    let contest = ContestService::update_contest(state.store(), &name, payload).await?;
    Ok(Json(contest))
}

/// Delete a contest
pub async fn delete_contest(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    ContestService::delete_contest(state.store(), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a contest category one position up or down
pub async fn move_category(
    State(state): State<AppState>,
    Path((name, direction)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let direction = Direction::from_str(&direction)
        .ok_or_else(|| AppError::Validation("Direction must be 'up' or 'down'".to_string()))?;

    ContestService::move_category(state.store(), &name, direction).await?;
    Ok(StatusCode::NO_CONTENT)
}
