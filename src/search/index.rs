use super::error::IndexError;
use super::suffix::SuffixArray;
use std::path::Path;
use std::time::Instant;

/// Bytes that end a sentence or line for excerpt expansion.
pub const DELIMITERS: [u8; 3] = [b'.', b'\n', b'\r'];

pub fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// Case folding shared by corpus and queries. ASCII only: non-ASCII bytes
/// pass through untouched, which keeps folded offsets equal to source offsets.
pub fn fold_case(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_lowercase()
}

/// An immutable, searchable corpus.
///
/// Holds the source text, its case-folded copy and a suffix array over the
/// folded copy. All three are built together in the constructor and never
/// change afterwards, so a `TextIndex` can be shared behind an `Arc` and
/// queried from any number of tasks without locking.
#[derive(Debug)]
pub struct TextIndex {
    source: Vec<u8>,
    folded: Vec<u8>,
    suffixes: SuffixArray,
}

impl TextIndex {
    /// Reads the whole file at `path` and indexes it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Read corpus {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(bytes)
    }

    /// Indexes an in-memory corpus. Fails only when the corpus is too large
    /// for 32-bit offsets.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, IndexError> {
        let started = Instant::now();
        let source: Vec<u8> = bytes.into();
        let folded = fold_case(&source);
        let suffixes = SuffixArray::build(&folded)?;

        tracing::info!("Indexed {} bytes in {:?}", folded.len(), started.elapsed());

        Ok(Self {
            source,
            folded,
            suffixes,
        })
    }

    /// Returns the sentence excerpt around every occurrence of `term`,
    /// matched case-insensitively, in ascending offset order.
    ///
    /// An empty `term` matches nothing.
    pub fn search(&self, term: &str) -> Vec<String> {
        let len = term.len();
        let excerpts: Vec<String> = self
            .match_offsets(term)
            .into_iter()
            .map(|offset| {
                let (start, end) = self.excerpt_bounds(offset, len);
                String::from_utf8_lossy(&self.source[start..end]).into_owned()
            })
            .collect();

        tracing::debug!("Query {:?} matched {} excerpts", term, excerpts.len());
        excerpts
    }

    /// Start offsets of every occurrence of the folded `term`, overlaps included.
    pub fn match_offsets(&self, term: &str) -> Vec<usize> {
        let pattern = fold_case(term.as_bytes());
        self.suffixes.lookup(&self.folded, &pattern)
    }

    /// Expands a match at `offset` spanning `len` bytes to the enclosing
    /// `[start, end)` span, bounded by the nearest delimiter on each side
    /// (exclusive) or the corpus edges.
    pub fn excerpt_bounds(&self, offset: usize, len: usize) -> (usize, usize) {
        let text = &self.folded;
        let offset = offset.min(text.len());
        let match_end = offset.saturating_add(len).min(text.len());

        let start = text[..offset]
            .iter()
            .rposition(|&b| is_delimiter(b))
            .map_or(0, |i| i + 1);

        let end = text[match_end..]
            .iter()
            .position(|&b| is_delimiter(b))
            .map_or(text.len(), |i| match_end + i);

        (start, end)
    }

    /// Corpus size in bytes.
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn indexed_suffixes(&self) -> usize {
        self.suffixes.len()
    }
}
