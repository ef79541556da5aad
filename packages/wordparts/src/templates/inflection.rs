//! Inflectional ending detection.
//!
//! Form-of templates name the lemma of an inflected word
//! (`{{plural of|en|cat}}` on the page for "cats"). Each table entry pairs
//! such a signature with the regular ending it implies.

use regex::Regex;
use std::sync::LazyLock;

use super::select::{select, Selection};
use crate::types::{Breakdown, WordPiece};

/// Category tag marking words whose forms do not follow regular endings.
pub const IRREGULAR_MARKER: &str = "Category:English irregular";

/// One row of the inflection table.
pub struct InflectionRule {
    /// Grammatical category, for logs.
    pub category: &'static str,
    /// Pattern whose first capture group is the lemma.
    pub signature: Regex,
    /// Regular ending for this category.
    pub ending: &'static str,
}

impl InflectionRule {
    #[allow(clippy::expect_used)] // Table patterns are static and covered by tests
    fn new(category: &'static str, signature: &str, ending: &'static str) -> Self {
        Self {
            category,
            signature: Regex::new(signature).expect("valid inflection pattern"),
            ending,
        }
    }

    /// Lemma named by this rule's signature, if the content carries it.
    #[must_use]
    pub fn lemma<'c>(&self, content: &'c str) -> Option<&'c str> {
        let captures = self.signature.captures(content)?;
        let lemma = captures.get(1)?.as_str().trim();
        (!lemma.is_empty()).then_some(lemma)
    }
}

/// Inflection table in evaluation order. The first entry wins ties.
static INFLECTION_RULES: LazyLock<Vec<InflectionRule>> = LazyLock::new(|| {
    vec![
        InflectionRule::new(
            "plural",
            r"\{\{\s*plural of\s*\|\s*en\s*\|([^|}]+)",
            "s",
        ),
        InflectionRule::new(
            "third-person singular",
            r"\{\{\s*(?:en-)?third-person singular of\s*\|(?:\s*en\s*\|)?([^|}]+)",
            "s",
        ),
        InflectionRule::new(
            "present participle",
            r"\{\{\s*present participle of\s*\|\s*en\s*\|([^|}]+)",
            "ing",
        ),
        InflectionRule::new("ing form", r"\{\{\s*en-ing form of\s*\|([^|}]+)", "ing"),
        InflectionRule::new(
            "present participle (prose)",
            r"(?i)present participle of\s+'*\[\[([^\]|#]+)",
            "ing",
        ),
        InflectionRule::new(
            "past",
            r"\{\{\s*(?:past tense of|past participle of|en-past of|en-simple past of)\s*\|(?:\s*en\s*\|)?([^|}]+)",
            "ed",
        ),
        InflectionRule::new(
            "comparative",
            r"\{\{\s*(?:en-)?comparative of\s*\|(?:\s*en\s*\|)?([^|}]+)",
            "er",
        ),
        InflectionRule::new(
            "superlative",
            r"\{\{\s*(?:en-)?superlative of\s*\|(?:\s*en\s*\|)?([^|}]+)",
            "est",
        ),
    ]
});

/// The inflection table.
#[must_use]
pub fn inflection_rules() -> &'static [InflectionRule] {
    &INFLECTION_RULES
}

/// Whether the markup marks the word as irregular.
#[must_use]
pub fn is_irregular(content: &str) -> bool {
    content.contains(IRREGULAR_MARKER)
}

/// Splits inflected words into lemma + regular ending.
pub struct InflectionEndings;

impl InflectionEndings {
    /// Every table entry that matches, in table order, as `[lemma, ending]`.
    #[must_use]
    pub fn candidates(&self, content: &str) -> Vec<Breakdown> {
        inflection_rules()
            .iter()
            .filter_map(|rule| {
                let lemma = rule.lemma(content)?;
                tracing::trace!(category = rule.category, lemma, "Inflection signature matched");
                Some(vec![WordPiece::base(lemma), WordPiece::inflection(rule.ending)])
            })
            .collect()
    }

    /// Validated inflection split for `word`.
    ///
    /// Irregular words are never split. Several distinct valid candidates
    /// yield an ambiguity diagnostic and the first in table order.
    #[must_use]
    pub fn split(&self, word: &str, content: &str) -> Selection {
        if is_irregular(content) {
            tracing::debug!(word, "Irregular word, skipping inflection split");
            return Selection::none();
        }
        select(word, self.candidates(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(word: &str, content: &str) -> Option<Breakdown> {
        InflectionEndings.split(word, content).breakdown
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(inflection_rules().len(), 8);
    }

    #[test]
    fn test_plural() {
        assert_eq!(
            split("cats", "# {{plural of|en|cat}}"),
            Some(vec![WordPiece::base("cat"), WordPiece::inflection("s")])
        );
    }

    #[test]
    fn test_third_person_variants() {
        let expected = Some(vec![WordPiece::base("run"), WordPiece::inflection("s")]);
        assert_eq!(split("runs", "# {{third-person singular of|en|run}}"), expected);
        assert_eq!(split("runs", "# {{en-third-person singular of|run}}"), expected);
    }

    #[test]
    fn test_ing_variants() {
        let expected = Some(vec![WordPiece::base("walk"), WordPiece::inflection("ing")]);
        assert_eq!(split("walking", "# {{present participle of|en|walk}}"), expected);
        assert_eq!(split("walking", "# {{en-ing form of|walk}}"), expected);
        assert_eq!(split("walking", "# Present participle of [[walk]]."), expected);
    }

    #[test]
    fn test_past_and_comparison() {
        assert_eq!(
            split("walked", "# {{past tense of|en|walk}}"),
            Some(vec![WordPiece::base("walk"), WordPiece::inflection("ed")])
        );
        assert_eq!(
            split("taller", "# {{comparative of|en|tall}}"),
            Some(vec![WordPiece::base("tall"), WordPiece::inflection("er")])
        );
        assert_eq!(
            split("tallest", "# {{en-superlative of|tall}}"),
            Some(vec![WordPiece::base("tall"), WordPiece::inflection("est")])
        );
    }

    #[test]
    fn test_named_args_not_captured() {
        assert_eq!(
            split("cats", "# {{plural of|en|cat|nocap=1}}"),
            Some(vec![WordPiece::base("cat"), WordPiece::inflection("s")])
        );
    }

    #[test]
    fn test_irregular_skipped() {
        let content = "# {{past tense of|en|go}}\n[[Category:English irregular verbs]]";
        assert!(is_irregular(content));
        assert_eq!(split("went", content), None);
    }

    #[test]
    fn test_implausible_candidate_rejected() {
        // "go" + "ed" is too far from "went" even without the category tag
        assert_eq!(split("went", "# {{past tense of|en|go}}"), None);
    }

    #[test]
    fn test_duplicate_candidates_are_not_ambiguous() {
        let content = "# {{present participle of|en|walk}}\n# {{en-ing form of|walk}}";
        let selection = InflectionEndings.split("walking", content);
        assert!(selection.ambiguity.is_none());
        assert_eq!(selection.breakdown.map(|b| b.len()), Some(2));
    }

    #[test]
    fn test_ambiguous_candidates_pick_table_order() {
        // Both lemmas spell "bases" within the edit bound
        let content = "# {{plural of|en|base}}\n# {{third-person singular of|en|bas}}";
        let selection = InflectionEndings.split("bases", content);
        assert_eq!(
            selection.breakdown,
            Some(vec![WordPiece::base("base"), WordPiece::inflection("s")])
        );
        assert!(selection.ambiguity.is_some());
    }

    #[test]
    fn test_no_signature() {
        assert!(InflectionEndings.candidates("# A small feline.").is_empty());
    }
}
