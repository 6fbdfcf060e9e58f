//! Search API Types
//!
//! Query parameters accepted by the search endpoint and the payload of the
//! health endpoint. Search results themselves are a plain JSON array of
//! excerpt strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Reported by `GET /health` once the corpus is indexed and serving.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub corpus_bytes: usize,
    pub indexed_suffixes: usize,
}
