//! Precomputed snapshot of English markup, loaded once and read-only.
//!
//! Snapshots are produced by a separate extraction job over a bulk dump.
//! The file is JSON:
//!
//! ```json
//! {
//!   "built_at": "2025-01-01T00:00:00Z",
//!   "entries": [
//!     { "word": "cats", "english_markup": "# {{plural of|en|cat}}", "content_hash": "…" }
//!   ]
//! }
//! ```
//!
//! `content_hash` is the hex SHA-256 of `english_markup`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ContentSource;
use crate::error::{Result, WordpartsError};

/// One row of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub word: String,
    pub english_markup: String,
    pub content_hash: String,
}

impl SnapshotEntry {
    /// Create a row, computing its content hash.
    #[must_use]
    pub fn new(word: impl Into<String>, english_markup: impl Into<String>) -> Self {
        let english_markup = english_markup.into();
        Self {
            word: word.into(),
            content_hash: content_hash(&english_markup),
            english_markup,
        }
    }

    /// Whether the stored hash matches the markup.
    #[must_use]
    pub fn is_intact(&self) -> bool {
        content_hash(&self.english_markup) == self.content_hash
    }
}

/// Hex-encoded SHA-256 of markup text.
#[must_use]
pub fn content_hash(markup: &str) -> String {
    hex::encode(Sha256::digest(markup.as_bytes()))
}

/// Whether a snapshot reflects the latest state of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Built at or after the source's last update.
    Fresh,
    /// The source changed after the snapshot was built.
    Stale,
}

/// Serialized snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub built_at: DateTime<Utc>,
    pub entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    #[must_use]
    pub fn new(built_at: DateTime<Utc>) -> Self {
        Self {
            built_at,
            entries: Vec::new(),
        }
    }

    /// Add a row, computing its hash.
    pub fn push(&mut self, word: impl Into<String>, english_markup: impl Into<String>) {
        self.entries.push(SnapshotEntry::new(word, english_markup));
    }

    /// Read a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write a snapshot file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Compare the build time against the source's last update.
    #[must_use]
    pub fn freshness(&self, source_updated_at: DateTime<Utc>) -> Freshness {
        freshness(self.built_at, source_updated_at)
    }
}

fn freshness(built_at: DateTime<Utc>, source_updated_at: DateTime<Utc>) -> Freshness {
    if built_at >= source_updated_at {
        Freshness::Fresh
    } else {
        Freshness::Stale
    }
}

/// Parse an RFC 3339 timestamp such as `2025-01-01T00:00:00Z`.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| WordpartsError::InvalidTimestamp(text.to_string()))
}

/// Immutable word → markup table built from a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotContentSource {
    built_at: DateTime<Utc>,
    entries: HashMap<String, String>,
}

impl SnapshotContentSource {
    /// Index a snapshot. Rows whose hash does not match are skipped.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let total = snapshot.entries.len();
        let entries: HashMap<String, String> = snapshot
            .entries
            .into_iter()
            .filter(|entry| {
                let intact = entry.is_intact();
                if !intact {
                    tracing::warn!(word = %entry.word, "Snapshot row hash mismatch, skipping");
                }
                intact
            })
            .map(|entry| (entry.word, entry.english_markup))
            .collect();

        tracing::debug!(
            built_at = %snapshot.built_at,
            loaded = entries.len(),
            total,
            "Snapshot indexed"
        );

        Self {
            built_at: snapshot.built_at,
            entries,
        }
    }

    /// Load and index a snapshot file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_snapshot(Snapshot::load(path)?))
    }

    #[must_use]
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Compare the build time against the source's last update.
    #[must_use]
    pub fn freshness(&self, source_updated_at: DateTime<Utc>) -> Freshness {
        freshness(self.built_at, source_updated_at)
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

impl ContentSource for SnapshotContentSource {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn lookup(&self, word: &str) -> Result<Option<String>> {
        Ok(self.entries.get(word).cloned())
    }
}
