use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`TextIndex`](super::index::TextIndex).
#[derive(Debug, Error)]
pub enum IndexError {
    /// The corpus source could not be read in full.
    #[error("failed to read corpus from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus does not fit 32-bit suffix offsets.
    #[error("corpus of {len} bytes exceeds the {max} byte index limit")]
    TooLarge { len: usize, max: usize },
}
