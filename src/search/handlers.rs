use super::index::TextIndex;
use super::types::{HealthResponse, SearchParams};
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub const MISSING_QUERY: &str = "missing search query in URL params";
pub const ENCODING_FAILURE: &str = "encoding failure";

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<Arc<TextIndex>>,
) -> Response {
    let query = match params.q.filter(|q| !q.is_empty()) {
        Some(q) => q,
        None => {
            tracing::warn!("Rejected search without a query");
            return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
        }
    };

    let mut excerpts = index.search(&query);
    if let Some(limit) = params.limit {
        excerpts.truncate(limit);
    }

    match serde_json::to_vec(&excerpts) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to encode results for {:?}: {}", query, err);
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

pub async fn handle_health(
    Extension(index): Extension<Arc<TextIndex>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            corpus_bytes: index.len(),
            indexed_suffixes: index.indexed_suffixes(),
        }),
    )
}

pub async fn handle_ui() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
