//! Course management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Course routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Course CRUD
        .route("/", get(handler::list_courses))
        .route("/", post(handler::create_course))
        .route("/{name}", get(handler::get_course))
        .route("/{name}", put(handler::update_course))
        .route("/{name}", delete(handler::delete_course))
        // Reference management
        .route("/{name}/assignments", put(handler::replace_assignments))
}
