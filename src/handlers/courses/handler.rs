//! Course handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::CourseService, state::AppState};

use super::{
    request::{CreateCourseRequest, ReplaceAssignmentsRequest, UpdateCourseRequest},
    response::{CourseResponse, CoursesListResponse},
};

/// List all courses
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<CoursesListResponse>> {
    let courses = CourseService::list_courses(state.store()).await?;

    Ok(Json(CoursesListResponse {
        total: courses.len(),
        courses,
    }))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    payload.validate()?;

    let course = CourseService::create_course(state.store(), payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Get a specific course
pub async fn get_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CourseResponse>> {
    let course = CourseService::get_course(state.store(), &name).await?;
    Ok(Json(course))
}

/// Update a course
pub async fn update_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    payload.validate()?;

    let course = CourseService::update_course(state.store(), &name, payload).await?;
    Ok(Json(course))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    CourseService::delete_course(state.store(), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the course's reference lists
pub async fn replace_assignments(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<ReplaceAssignmentsRequest>,
) -> AppResult<Json<CourseResponse>> {
    payload.validate()?;

    let course = CourseService::replace_assignments(state.store(), &name, payload).await?;
    Ok(Json(course))
}
