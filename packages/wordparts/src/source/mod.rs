//! Content sources: where the English markup for a word comes from.
//!
//! The decomposer only sees the [`ContentSource`] trait. Three
//! implementations are provided:
//!
//! - [`MapContentSource`]: an in-memory map, for tests and embedding
//! - [`WiktionaryContentSource`]: live per-word fetch of raw wikitext
//! - [`SnapshotContentSource`]: a precomputed snapshot file loaded up front

mod snapshot;
mod wiktionary;

use std::collections::HashMap;

use crate::english::english_content;
use crate::error::Result;

pub use snapshot::{
    content_hash, parse_timestamp, Freshness, Snapshot, SnapshotContentSource, SnapshotEntry,
};
pub use wiktionary::WiktionaryContentSource;

/// Read-only provider of English-filtered markup.
///
/// Implementations must be safe to share between threads decomposing
/// different words.
pub trait ContentSource: Send + Sync {
    /// Name of this source, for logs.
    fn name(&self) -> &str;

    /// English markup for `word`, or `None` if it has no English entry.
    ///
    /// # Errors
    /// Only `StructuralMismatch` raised while filtering an entry. Fetch
    /// failures are reported as `None`.
    fn lookup(&self, word: &str) -> Result<Option<String>>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, word: &str) -> Result<Option<String>> {
        (**self).lookup(word)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, word: &str) -> Result<Option<String>> {
        (**self).lookup(word)
    }
}

/// In-memory source keyed by word.
#[derive(Debug, Clone, Default)]
pub struct MapContentSource {
    entries: HashMap<String, String>,
}

impl MapContentSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already-filtered English markup for a word.
    pub fn insert(&mut self, word: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(word.into(), content.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, word: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(word, content);
        self
    }

    /// Store a full entry, keeping only its filtered English section.
    ///
    /// Returns whether the entry had an English section.
    pub fn insert_entry(&mut self, word: impl Into<String>, entry: &str) -> Result<bool> {
        match english_content(entry)? {
            Some(content) => {
                self.insert(word, content);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MapContentSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl ContentSource for MapContentSource {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, word: &str) -> Result<Option<String>> {
        Ok(self.entries.get(word).cloned())
    }
}
