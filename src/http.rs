use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::search::TextIndex;
use crate::search::handlers::{handle_health, handle_search, handle_ui};

/// Builds the application router around an already loaded index.
pub fn router(index: Arc<TextIndex>) -> Router {
    Router::new()
        .route("/", get(handle_ui))
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .layer(Extension(index))
}
