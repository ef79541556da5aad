//! Ordered registry of morpheme strategies.

use super::strategy::{
    AffixStrategy, AlternativeSpellingStrategy, CompoundStrategy, ConfixStrategy,
    PrefixStrategy, SuffixStrategy, TemplateStrategy,
};
use crate::types::Breakdown;

/// Strategies in priority order. Earlier strategies win ambiguous ties.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn TemplateStrategy>>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy with the lowest priority so far.
    pub fn register(&mut self, strategy: impl TemplateStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    /// Strategy names in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run every strategy, keeping non-empty breakdowns in priority order.
    #[must_use]
    pub fn candidates(&self, word: &str, content: &str) -> Vec<Breakdown> {
        self.strategies
            .iter()
            .filter_map(|strategy| {
                let breakdown = strategy.extract(content);
                if breakdown.is_empty() {
                    return None;
                }
                tracing::trace!(
                    word,
                    strategy = strategy.name(),
                    pieces = breakdown.len(),
                    "Strategy produced candidate"
                );
                Some(breakdown)
            })
            .collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the registry of morpheme strategies in their fixed order.
///
/// ```text
/// alternative_spelling → affix → prefix → suffix → compound → confix
/// ```
#[must_use]
pub fn create_morpheme_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register(AlternativeSpellingStrategy);
    registry.register(AffixStrategy);
    registry.register(PrefixStrategy);
    registry.register(SuffixStrategy);
    registry.register(CompoundStrategy);
    registry.register(ConfixStrategy);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, WordPiece};

    #[test]
    fn test_create_morpheme_registry_order() {
        let registry = create_morpheme_registry();
        assert_eq!(
            registry.names(),
            vec![
                "alternative_spelling",
                "affix",
                "prefix",
                "suffix",
                "compound",
                "confix"
            ]
        );
    }

    #[test]
    fn test_candidates_in_priority_order() {
        let registry = create_morpheme_registry();
        let content = "{{compound|en|rain|bow}} {{af|en|rain|-bow}}";
        let candidates = registry.candidates("rainbow", content);
        assert_eq!(candidates.len(), 2);
        // Affix runs before compound
        assert_eq!(
            candidates[0],
            vec![WordPiece::base("rain"), WordPiece::new("-bow", Role::Suffix)]
        );
        assert_eq!(
            candidates[1],
            vec![WordPiece::base("rain"), WordPiece::base("bow")]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.candidates("x", "{{compound|en|a|b}}").is_empty());
    }
}
