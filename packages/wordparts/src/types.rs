//! Core data types: labeled word pieces, breakdowns and diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Morphological role of a word piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Stem or free word, eligible for further decomposition.
    BaseWord,
    /// Bound morpheme before the stem (carries a trailing hyphen internally).
    Prefix,
    /// Bound morpheme after the stem (carries a leading hyphen internally).
    Suffix,
    /// Connecting morpheme (carries hyphens on both sides internally).
    Interfix,
    /// Grammatical ending such as plural "s" or past tense "ed".
    Inflection,
}

impl Role {
    /// Get the label used in rendered output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseWord => "base_word",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Interfix => "interfix",
            Self::Inflection => "inflection",
        }
    }

    /// Classify an affix argument by where its boundary hyphens sit.
    ///
    /// ```
    /// use wordparts::Role;
    ///
    /// assert_eq!(Role::from_hyphens("un-"), Role::Prefix);
    /// assert_eq!(Role::from_hyphens("-ness"), Role::Suffix);
    /// assert_eq!(Role::from_hyphens("-o-"), Role::Interfix);
    /// assert_eq!(Role::from_hyphens("happy"), Role::BaseWord);
    /// ```
    #[must_use]
    pub fn from_hyphens(text: &str) -> Self {
        match (text.starts_with('-'), text.ends_with('-') && text.len() > 1) {
            (true, true) => Self::Interfix,
            (true, false) => Self::Suffix,
            (false, true) => Self::Prefix,
            (false, false) => Self::BaseWord,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled fragment of a decomposed word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPiece {
    pub text: String,
    pub role: Role,
}

impl WordPiece {
    #[must_use]
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    #[must_use]
    pub fn base(text: impl Into<String>) -> Self {
        Self::new(text, Role::BaseWord)
    }

    /// Prefix piece; a trailing boundary hyphen is added if missing.
    #[must_use]
    pub fn prefix(text: &str) -> Self {
        Self::new(format!("{}-", text.trim_matches('-')), Role::Prefix)
    }

    /// Suffix piece; a leading boundary hyphen is added if missing.
    #[must_use]
    pub fn suffix(text: &str) -> Self {
        Self::new(format!("-{}", text.trim_matches('-')), Role::Suffix)
    }

    #[must_use]
    pub fn inflection(text: impl Into<String>) -> Self {
        Self::new(text, Role::Inflection)
    }

    /// Whether the piece may be decomposed further.
    #[must_use]
    pub fn is_base_word(&self) -> bool {
        self.role == Role::BaseWord
    }

    /// Text with boundary hyphens removed, as shown to users.
    #[must_use]
    pub fn bare_text(&self) -> &str {
        match self.role {
            Role::BaseWord => &self.text,
            _ => self.text.trim_matches('-'),
        }
    }
}

/// Ordered pieces produced by one strategy at one recursion level.
pub type Breakdown = Vec<WordPiece>;

/// Non-fatal condition observed while decomposing a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No English entry exists for the word; it was kept as a leaf.
    NotEnglishWord { word: String },

    /// Several distinct candidates survived validation; the first was used.
    AmbiguousBreakdown {
        word: String,
        candidates: Vec<Breakdown>,
    },

    /// The depth bound was hit; the word was kept as a leaf.
    DepthExceeded { word: String, max_depth: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnglishWord { word } => write!(f, "'{word}' has no English entry"),
            Self::AmbiguousBreakdown { word, candidates } => write!(
                f,
                "'{word}' has {} candidate breakdowns, using the first",
                candidates.len()
            ),
            Self::DepthExceeded { word, max_depth } => {
                write!(f, "'{word}' exceeded the maximum depth of {max_depth}")
            }
        }
    }
}

/// Final result of decomposing a word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decomposition {
    pub word: String,
    pub pieces: Vec<WordPiece>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Decomposition {
    /// Piece texts in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }

    /// Whether the word was left whole.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.pieces.len() == 1 && self.pieces[0].text == self.word
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .pieces
            .iter()
            .map(|p| format!("{} ({})", p.text, p.role))
            .collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
