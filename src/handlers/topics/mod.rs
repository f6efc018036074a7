//! Topic management handlers

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

/// Topic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Topic CRUD
        .route("/", get(handler::list_topics))
        .route("/", post(handler::create_topic))
        .route("/categories", get(handler::list_topic_categories))
        .route("/{name}", get(handler::get_topic))
        .route("/{name}", put(handler::update_topic))
        .route("/{name}", delete(handler::delete_topic))
        // Manual reordering
        .route("/{name}/move/{direction}", post(handler::move_topic))
        // Reference material viewer
        .route("/{name}/resource", get(handler::view_topic_resource))
}
