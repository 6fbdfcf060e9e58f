//! Search Module
//!
//! Case-insensitive substring search over a single in-memory corpus.
//!
//! ## Overview
//! The corpus is read once at startup, folded to lowercase and indexed with a
//! suffix array. A query is folded the same way, every occurrence is located
//! through the suffix array, and each occurrence is widened to the sentence
//! around it: the text between the nearest `.`, `\n` or `\r` on either side.
//!
//! ## Submodules
//! - **`index`**: `TextIndex`, owner of the corpus and the query operation.
//! - **`suffix`**: The suffix array used to enumerate match offsets.
//! - **`error`**: Load failures.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod error;
pub mod handlers;
pub mod index;
pub mod suffix;
pub mod types;

pub use error::IndexError;
pub use index::TextIndex;
