//! Sentence Search Library
//!
//! Serves substring queries against a single text corpus that is loaded once
//! at startup. Every match is returned as the sentence that contains it.
//!
//! ## Modules
//! - **`search`**: The corpus index. Case folding, the suffix array, sentence
//!   excerpt expansion and the HTTP handlers that expose them.
//! - **`config`**: Port and corpus location, from the environment and CLI flags.
//! - **`http`**: Assembles the Axum router around a loaded index.

pub mod config;
pub mod http;
pub mod search;
