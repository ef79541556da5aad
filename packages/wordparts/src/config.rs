//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use url::Url;

use crate::error::{Result, WordpartsError};

/// Endpoint serving raw wikitext for a page title.
pub const WIKTIONARY_RAW_URL: &str = "https://en.wiktionary.org/w/index.php";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (8 MB).
///
/// The largest English entries are a few hundred kilobytes of wikitext.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 8 * 1024 * 1024;

/// Recursion levels a single decomposition path may descend.
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Largest edit distance between a word and its rejoined pieces.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Longest accepted headword, in characters.
pub const MAX_WORD_LEN: usize = 100;

/// Characters that would break out of a template argument or a link.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKUP_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\{\}\[\]\|<>#\r\n]").expect("valid regex"));

/// Normalize a word for lookup: Unicode NFC and surrounding whitespace trimmed.
///
/// # Examples
/// ```
/// use wordparts::config::normalize_word;
///
/// assert_eq!(normalize_word("  cats "), "cats");
/// assert_eq!(normalize_word("cafe\u{301}"), "caf\u{e9}");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.trim().nfc().collect()
}

/// Validate a headword before it is looked up or decomposed.
///
/// # Returns
/// * `Ok(())` if the word is non-empty, not too long and free of markup characters
/// * `Err(WordpartsError::InvalidWord)` otherwise
///
/// # Examples
/// ```
/// use wordparts::config::validate_word;
///
/// assert!(validate_word("unhappiness").is_ok());
/// assert!(validate_word("ice cream").is_ok());
/// assert!(validate_word("").is_err());
/// assert!(validate_word("{{foo}}").is_err());
/// ```
pub fn validate_word(word: &str) -> Result<()> {
    let len = word.chars().count();
    if word.trim().is_empty() || len > MAX_WORD_LEN || MARKUP_CHARS.is_match(word) {
        return Err(WordpartsError::InvalidWord(word.to_string()));
    }
    Ok(())
}

/// Build the raw-wikitext URL for a page title.
///
/// # Examples
/// ```
/// use wordparts::config::{raw_url, WIKTIONARY_RAW_URL};
///
/// let url = raw_url(WIKTIONARY_RAW_URL, "ice cream").unwrap();
/// assert_eq!(
///     url,
///     "https://en.wiktionary.org/w/index.php?title=ice+cream&action=raw"
/// );
/// ```
pub fn raw_url(base: &str, word: &str) -> Result<String> {
    let url = Url::parse_with_params(base, &[("title", word), ("action", "raw")])?;
    Ok(url.into())
}

/// Options controlling a decomposition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposeOptions {
    /// Deepest recursion level explored on any single path.
    pub max_depth: usize,
}

impl DecomposeOptions {
    /// Create options with the default depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self::new()
    }
}
