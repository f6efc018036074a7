//! Problem handler implementations

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
    services::ProblemService,
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, UpdateProblemRequest},
    response::{ProblemResponse, ProblemsListResponse},
};

/// List all problems grouped by principal topic
pub async fn list_problems(
    State(state): State<AppState>,
) -> AppResult<Json<ProblemsListResponse>> {
    let groups = ProblemService::list_problems(state.store()).await?;
    let total = groups.iter().map(|g| g.problems.len()).sum();

    Ok(Json(ProblemsListResponse { groups, total }))
}

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;

    let problem = ProblemService::create_problem(state.store(), payload).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get a specific problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.store(), &id).await?;
    Ok(Json(problem))
}

/// Update a problem
pub async fn update_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;

    let problem = ProblemService::update_problem(state.store(), &id, payload).await?;
    Ok(Json(problem))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    ProblemService::delete_problem(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a problem one position up or down within its group
pub async fn move_problem(
    State(state): State<AppState>,
    Path((id, direction)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let direction = Direction::from_str(&direction)
        .ok_or_else(|| AppError::Validation("Direction must be 'up' or 'down'".to_string()))?;

    ProblemService::move_problem(state.store(), &id, direction).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Stream a problem's solution file
pub async fn view_problem_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let files_dir = &state.config().storage.files_dir;
    let content = ProblemService::open_solution(state.store(), files_dir, &id).await?;

    Ok(([(header::CONTENT_TYPE, content.content_type)], content.bytes))
}
