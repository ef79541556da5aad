//! Morpheme extraction strategies, one per template kind.

use regex::Regex;
use std::sync::LazyLock;

use super::args::{first_template_args, template_pattern};
use crate::types::{Breakdown, Role, WordPiece};

/// Trait for template-driven extraction strategies.
///
/// A strategy looks for its template in the English markup of a word and
/// turns the template arguments into labeled pieces. An empty breakdown
/// means the template is absent or its arguments do not fit the template's
/// shape; validation against the word happens later.
pub trait TemplateStrategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Extract a candidate breakdown from the markup.
    fn extract(&self, content: &str) -> Breakdown;
}

static ALT_SPELLING: LazyLock<Regex> =
    LazyLock::new(|| template_pattern(&["alternative spelling of", "alt sp"]));
static AFFIX: LazyLock<Regex> = LazyLock::new(|| template_pattern(&["affix", "af"]));
static PREFIX: LazyLock<Regex> = LazyLock::new(|| template_pattern(&["prefix", "pre"]));
static SUFFIX: LazyLock<Regex> = LazyLock::new(|| template_pattern(&["suffix", "suf"]));
static COMPOUND: LazyLock<Regex> = LazyLock::new(|| template_pattern(&["compound", "com"]));
static CONFIX: LazyLock<Regex> = LazyLock::new(|| template_pattern(&["confix", "con"]));

/// `{{alternative spelling of|en|ice cream}}` → "ice" + "cream".
///
/// Only spellings containing a space or hyphen split; anything else is a
/// plain respelling and yields nothing.
pub struct AlternativeSpellingStrategy;

impl TemplateStrategy for AlternativeSpellingStrategy {
    fn name(&self) -> &'static str {
        "alternative_spelling"
    }

    fn extract(&self, content: &str) -> Breakdown {
        let Some(args) = first_template_args(&ALT_SPELLING, content) else {
            return Vec::new();
        };
        let Some(spelling) = args.first() else {
            return Vec::new();
        };

        let separator = if spelling.contains(' ') {
            ' '
        } else if spelling.contains('-') {
            '-'
        } else {
            return Vec::new();
        };

        spelling
            .split(separator)
            .filter(|part| !part.is_empty())
            .map(WordPiece::base)
            .collect()
    }
}

/// `{{affix|en|un-|happy|-ness}}`, labeled by hyphen position.
pub struct AffixStrategy;

impl TemplateStrategy for AffixStrategy {
    fn name(&self) -> &'static str {
        "affix"
    }

    fn extract(&self, content: &str) -> Breakdown {
        first_template_args(&AFFIX, content)
            .unwrap_or_default()
            .into_iter()
            .map(|arg| {
                let role = Role::from_hyphens(&arg);
                WordPiece::new(arg, role)
            })
            .collect()
    }
}

/// `{{prefix|en|un|happy}}` → "un-" + "happy". Exactly two arguments.
pub struct PrefixStrategy;

impl TemplateStrategy for PrefixStrategy {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn extract(&self, content: &str) -> Breakdown {
        match first_template_args(&PREFIX, content).as_deref() {
            Some([prefix, base]) => vec![WordPiece::prefix(prefix), WordPiece::base(base)],
            _ => Vec::new(),
        }
    }
}

/// `{{suffix|en|happy|ness}}` → "happy" + "-ness". Exactly two arguments.
pub struct SuffixStrategy;

impl TemplateStrategy for SuffixStrategy {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn extract(&self, content: &str) -> Breakdown {
        match first_template_args(&SUFFIX, content).as_deref() {
            Some([base, suffix]) => vec![WordPiece::base(base), WordPiece::suffix(suffix)],
            _ => Vec::new(),
        }
    }
}

/// `{{compound|en|rain|bow}}`; every argument is a base word.
pub struct CompoundStrategy;

impl TemplateStrategy for CompoundStrategy {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn extract(&self, content: &str) -> Breakdown {
        first_template_args(&COMPOUND, content)
            .unwrap_or_default()
            .into_iter()
            .map(WordPiece::base)
            .collect()
    }
}

/// `{{confix|en|en|light|en}}` → "en-" + "light" + "-en".
///
/// Two arguments give prefix + suffix, three give prefix + base + suffix.
pub struct ConfixStrategy;

impl TemplateStrategy for ConfixStrategy {
    fn name(&self) -> &'static str {
        "confix"
    }

    fn extract(&self, content: &str) -> Breakdown {
        match first_template_args(&CONFIX, content).as_deref() {
            Some([prefix, suffix]) => vec![WordPiece::prefix(prefix), WordPiece::suffix(suffix)],
            Some([prefix, base, suffix]) => vec![
                WordPiece::prefix(prefix),
                WordPiece::base(base),
                WordPiece::suffix(suffix),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alternative_spelling_space() {
        let content = "# {{alternative spelling of|en|ice cream}}";
        assert_eq!(
            AlternativeSpellingStrategy.extract(content),
            vec![WordPiece::base("ice"), WordPiece::base("cream")]
        );
    }

    #[test]
    fn test_alternative_spelling_hyphen() {
        let content = "# {{alt sp|en|e-mail}}";
        assert_eq!(
            AlternativeSpellingStrategy.extract(content),
            vec![WordPiece::base("e"), WordPiece::base("mail")]
        );
    }

    #[test]
    fn test_alternative_spelling_plain_respelling() {
        let content = "# {{alternative spelling of|en|colour}}";
        assert!(AlternativeSpellingStrategy.extract(content).is_empty());
    }

    #[test]
    fn test_affix_roles() {
        let content = "From {{af|en|un-|happy|-ness}}.";
        assert_eq!(
            AffixStrategy.extract(content),
            vec![
                WordPiece::new("un-", Role::Prefix),
                WordPiece::base("happy"),
                WordPiece::new("-ness", Role::Suffix),
            ]
        );
    }

    #[test]
    fn test_affix_interfix() {
        let content = "{{affix|en|speed|-o-|meter}}";
        let pieces = AffixStrategy.extract(content);
        assert_eq!(pieces[1], WordPiece::new("-o-", Role::Interfix));
    }

    #[test]
    fn test_prefix_two_args() {
        let content = "From {{prefix|en|un|happy}}.";
        assert_eq!(
            PrefixStrategy.extract(content),
            vec![WordPiece::prefix("un"), WordPiece::base("happy")]
        );
    }

    #[test]
    fn test_prefix_wrong_arg_count() {
        assert!(PrefixStrategy.extract("{{prefix|en|un}}").is_empty());
        assert!(PrefixStrategy.extract("{{pre|en|un|re|do}}").is_empty());
    }

    #[test]
    fn test_prefix_ignores_named_args() {
        let content = "{{prefix|en|re|do|t2=to perform}}";
        assert_eq!(
            PrefixStrategy.extract(content),
            vec![WordPiece::prefix("re"), WordPiece::base("do")]
        );
    }

    #[test]
    fn test_suffix() {
        let content = "From {{suffix|en|happy|ness}}.";
        assert_eq!(
            SuffixStrategy.extract(content),
            vec![WordPiece::base("happy"), WordPiece::suffix("ness")]
        );
        assert!(SuffixStrategy.extract("{{suf|en|happy}}").is_empty());
    }

    #[test]
    fn test_compound_preserves_order() {
        let content = "{{compound|en|rain|bow}}";
        assert_eq!(
            CompoundStrategy.extract(content),
            vec![WordPiece::base("rain"), WordPiece::base("bow")]
        );
    }

    #[test]
    fn test_compound_does_not_match_confix() {
        assert!(CompoundStrategy.extract("{{con|en|en|light|en}}").is_empty());
    }

    #[test]
    fn test_confix_two_and_three_args() {
        assert_eq!(
            ConfixStrategy.extract("{{confix|en|en|light|en}}"),
            vec![
                WordPiece::prefix("en"),
                WordPiece::base("light"),
                WordPiece::suffix("en"),
            ]
        );
        assert_eq!(
            ConfixStrategy.extract("{{con|en|em|en}}"),
            vec![WordPiece::prefix("em"), WordPiece::suffix("en")]
        );
        assert!(ConfixStrategy.extract("{{confix|en|a}}").is_empty());
    }

    #[test]
    fn test_strategies_ignore_other_languages() {
        assert!(CompoundStrategy.extract("{{compound|de|Regen|Bogen}}").is_empty());
    }
}
