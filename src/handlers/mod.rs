//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod courses;
pub mod health;
pub mod problems;
pub mod topics;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/topics", topics::routes())
        .nest("/contests", contests::routes())
        .nest("/problems", problems::routes())
        .nest("/courses", courses::routes())
}
