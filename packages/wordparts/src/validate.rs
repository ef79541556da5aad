//! Acceptance checks for candidate breakdowns.
//!
//! Template data is hand-edited and sometimes describes a related form rather
//! than the headword itself ("happiness" → "happy" + "-ness"). A candidate is
//! accepted when its pieces spell the word approximately and it actually
//! splits the word.

use std::cmp::min;

use crate::config::MAX_EDIT_DISTANCE;
use crate::types::WordPiece;

/// Levenshtein distance between two strings, counted in characters.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn one string into the other.
///
/// ```
/// use wordparts::validate::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("unhappiness", "unhappyness"), 1);
/// ```
#[must_use]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = min(
                min(
                    prev[j + 1] + 1, // deletion
                    curr[j] + 1,     // insertion
                ),
                prev[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Concatenate piece texts with all hyphens removed.
#[must_use]
pub fn rejoin(pieces: &[WordPiece]) -> String {
    pieces
        .iter()
        .flat_map(|p| p.text.chars())
        .filter(|&c| c != '-')
        .collect()
}

/// Whether the pieces spell `original` within [`MAX_EDIT_DISTANCE`] edits.
///
/// Hyphens in `original` are ignored as well, so "well-being" is spelled
/// by "well" + "being".
#[must_use]
pub fn reconstructs(original: &str, pieces: &[WordPiece]) -> bool {
    let target: String = original.chars().filter(|&c| c != '-').collect();
    levenshtein_distance(&rejoin(pieces), &target) <= MAX_EDIT_DISTANCE
}

/// Whether no single piece is the original word verbatim.
#[must_use]
pub fn non_explosive(original: &str, pieces: &[WordPiece]) -> bool {
    !pieces.iter().any(|p| p.text == original)
}

/// Both acceptance checks. Empty breakdowns are never accepted.
#[must_use]
pub fn accepts(original: &str, pieces: &[WordPiece]) -> bool {
    !pieces.is_empty() && reconstructs(original, pieces) && non_explosive(original, pieces)
}
