//! Contest management handlers

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

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Contest CRUD
        .route("/", get(handler::list_contests))
        .route("/", post(handler::create_contest))
        // Category listing and reordering
        .route("/categories", get(handler::list_categories))
        .route(
            "/categories/{name}/move/{direction}",
            post(handler::move_category),
        )
        .route("/{name}", get(handler::get_contest))
        .route("/{name}", put(handler::update_contest))
        .route("/{name}", delete(handler::delete_contest))
}
