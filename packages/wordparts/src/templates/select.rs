//! Candidate validation, deduplication and tie-breaking.

use crate::types::{Breakdown, Diagnostic};
use crate::validate;

/// Outcome of choosing among candidate breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// First surviving candidate, if any.
    pub breakdown: Option<Breakdown>,
    /// Set when more than one distinct candidate survived.
    pub ambiguity: Option<Diagnostic>,
}

impl Selection {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Validate candidates for `word` and pick the first survivor.
///
/// Invalid candidates are dropped without a diagnostic; they come from
/// malformed or unrelated template data. Structurally equal survivors count
/// once. The input order is the priority order: this tie-break is the
/// contract, not a ranking by quality.
#[must_use]
pub fn select(word: &str, candidates: impl IntoIterator<Item = Breakdown>) -> Selection {
    let mut unique: Vec<Breakdown> = Vec::new();

    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if !validate::accepts(word, &candidate) {
            tracing::debug!(
                word,
                rejoined = %validate::rejoin(&candidate),
                "Rejected candidate breakdown"
            );
            continue;
        }
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }

    let ambiguity = (unique.len() > 1).then(|| {
        tracing::warn!(
            word,
            candidates = unique.len(),
            "Ambiguous breakdown, using the first candidate"
        );
        Diagnostic::AmbiguousBreakdown {
            word: word.to_string(),
            candidates: unique.clone(),
        }
    });

    Selection {
        breakdown: unique.into_iter().next(),
        ambiguity,
    }
}
