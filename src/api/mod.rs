//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::directory::AlbumDirectory;

pub mod handlers;
pub mod state;

pub use handlers::{ApiError, IndentedJson};
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for serving an existing directory
pub fn create_directory_router(directory: Arc<AlbumDirectory>) -> Router {
    create_router(AppState::new(directory))
}
