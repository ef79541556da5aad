//! Recursive decomposition engine.

use super::node::{Branch, DecompositionNode};
use crate::config::{normalize_word, validate_word, DecomposeOptions};
use crate::error::Result;
use crate::source::ContentSource;
use crate::templates::{create_morpheme_registry, select, InflectionEndings, StrategyRegistry};
use crate::types::{Decomposition, Diagnostic, Role};

/// Tree produced by [`Decomposer::analyze`] plus the diagnostics raised
/// anywhere in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub root: DecompositionNode,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Flatten into pieces with boundary hyphens kept ("un-", "-ness").
    #[must_use]
    pub fn into_raw(self) -> Decomposition {
        Decomposition {
            pieces: self.root.flatten(),
            word: self.root.word,
            diagnostics: self.diagnostics,
        }
    }

    /// Flatten into user-facing pieces: hyphens stripped, and a lone piece
    /// is always a base word.
    #[must_use]
    pub fn into_public(self) -> Decomposition {
        let mut decomposition = self.into_raw();
        for piece in &mut decomposition.pieces {
            piece.text = piece.bare_text().to_string();
        }
        if let [piece] = decomposition.pieces.as_mut_slice() {
            piece.role = Role::BaseWord;
        }
        decomposition
    }
}

/// Decomposes words using markup from a [`ContentSource`].
///
/// For each word: split an inflectional ending, then split morphemes with
/// the strategy registry, then recurse into every base-word piece. Affixes
/// are never analyzed further. Depth is counted per path.
pub struct Decomposer<S: ContentSource> {
    source: S,
    morphemes: StrategyRegistry,
    inflections: InflectionEndings,
    options: DecomposeOptions,
}

impl<S: ContentSource> Decomposer<S> {
    /// Create a decomposer with the default strategies and options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            morphemes: create_morpheme_registry(),
            inflections: InflectionEndings,
            options: DecomposeOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DecomposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the morpheme strategies.
    #[must_use]
    pub fn with_registry(mut self, registry: StrategyRegistry) -> Self {
        self.morphemes = registry;
        self
    }

    #[must_use]
    pub fn options(&self) -> DecomposeOptions {
        self.options
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the decomposition tree for a word.
    ///
    /// # Errors
    /// `InvalidWord` for unusable input, `StructuralMismatch` if an entry's
    /// markup cannot be sectioned.
    pub fn analyze(&self, word: &str) -> Result<Analysis> {
        let word = normalize_word(word);
        validate_word(&word)?;

        let mut diagnostics = Vec::new();
        let root = self.visit(&word, 0, &mut diagnostics)?;
        Ok(Analysis { root, diagnostics })
    }

    /// Decompose a word into user-facing pieces.
    pub fn decompose(&self, word: &str) -> Result<Decomposition> {
        Ok(self.analyze(word)?.into_public())
    }

    /// Decompose a word keeping boundary hyphens.
    pub fn decompose_raw(&self, word: &str) -> Result<Decomposition> {
        Ok(self.analyze(word)?.into_raw())
    }

    fn visit(
        &self,
        word: &str,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<DecompositionNode> {
        if depth > self.options.max_depth {
            return Ok(self.depth_exceeded(word, depth, diagnostics));
        }

        let Some(content) = self.source.lookup(word)? else {
            tracing::debug!(word, depth, source = self.source.name(), "No English entry");
            diagnostics.push(Diagnostic::NotEnglishWord {
                word: word.to_string(),
            });
            return Ok(DecompositionNode::leaf(word, depth));
        };

        // Inflection first: "unhappier" is analyzed as "unhappy" + "er"
        let inflected = self.inflections.split(word, &content);
        diagnostics.extend(inflected.ambiguity);

        let (stem, stem_content, inflection) = match inflected.breakdown {
            Some(mut pieces) if pieces.len() == 2 => {
                let inflection = pieces.pop();
                let stem = pieces.pop().map(|p| p.text).unwrap_or_default();
                let stem_content = self.source.lookup(&stem)?;
                tracing::debug!(word, stem = %stem, "Split inflection");
                (stem, stem_content, inflection)
            }
            _ => (word.to_string(), Some(content), None),
        };

        let morphemes = match &stem_content {
            Some(content) => select(&stem, self.morphemes.candidates(&stem, content)),
            None => Default::default(),
        };
        diagnostics.extend(morphemes.ambiguity);

        let Some(breakdown) = morphemes.breakdown else {
            if inflection.is_none() {
                return Ok(DecompositionNode::leaf(word, depth));
            }
            // The stem's markup was already examined above
            let stem_node = if depth + 1 > self.options.max_depth {
                self.depth_exceeded(&stem, depth + 1, diagnostics)
            } else {
                DecompositionNode::leaf(stem, depth + 1)
            };
            return Ok(DecompositionNode {
                word: word.to_string(),
                depth,
                children: vec![Branch::Node(stem_node)],
                inflection,
            });
        };

        tracing::debug!(
            word = %stem,
            depth,
            pieces = ?breakdown.iter().map(|p| p.text.as_str()).collect::<Vec<_>>(),
            "Split morphemes"
        );

        let mut children = Vec::with_capacity(breakdown.len());
        for piece in breakdown {
            let child = if piece.is_base_word() {
                Branch::Node(self.visit(&piece.text, depth + 1, diagnostics)?)
            } else {
                Branch::Piece(piece)
            };
            children.push(child);
        }

        Ok(DecompositionNode {
            word: word.to_string(),
            depth,
            children,
            inflection,
        })
    }

    fn depth_exceeded(
        &self,
        word: &str,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> DecompositionNode {
        tracing::warn!(
            word,
            max_depth = self.options.max_depth,
            "Maximum decomposition depth exceeded"
        );
        diagnostics.push(Diagnostic::DepthExceeded {
            word: word.to_string(),
            max_depth: self.options.max_depth,
        });
        DecompositionNode::leaf(word, depth)
    }
}

/// Decompose `word` with default options, returning user-facing pieces.
pub fn decompose<S: ContentSource>(source: S, word: &str) -> Result<Decomposition> {
    Decomposer::new(source).decompose(word)
}

/// Decompose `word` with an explicit depth bound, keeping boundary hyphens.
pub fn decompose_raw<S: ContentSource>(
    source: S,
    word: &str,
    max_depth: usize,
) -> Result<Decomposition> {
    Decomposer::new(source)
        .with_options(DecomposeOptions::new().with_max_depth(max_depth))
        .decompose_raw(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MapContentSource;
    use crate::types::Role;
    use pretty_assertions::assert_eq;

    fn pieces(decomposition: &Decomposition) -> Vec<(&str, Role)> {
        decomposition
            .pieces
            .iter()
            .map(|p| (p.text.as_str(), p.role))
            .collect()
    }

    #[test]
    fn test_plural_scenario() {
        let source = MapContentSource::new().with("cats", "# {{plural of|en|cat}}");
        let result = decompose_raw(&source, "cats", 30).unwrap();
        assert_eq!(
            pieces(&result),
            vec![("cat", Role::BaseWord), ("s", Role::Inflection)]
        );
    }

    #[test]
    fn test_compound_scenario() {
        let source = MapContentSource::new()
            .with("rainbow", "From {{compound|en|rain|bow}}.")
            .with("rain", "# Water falling from clouds.")
            .with("bow", "# A weapon.");
        let result = decompose_raw(&source, "rainbow", 30).unwrap();
        assert_eq!(
            pieces(&result),
            vec![("rain", Role::BaseWord), ("bow", Role::BaseWord)]
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_irregular_scenario() {
        let source = MapContentSource::new().with(
            "went",
            "# {{past tense of|en|go}}\n[[Category:English irregular verbs]]",
        );
        let result = decompose_raw(&source, "went", 30).unwrap();
        assert_eq!(pieces(&result), vec![("went", Role::BaseWord)]);
    }

    #[test]
    fn test_prefix_scenario_raw_and_public() {
        let source = MapContentSource::new()
            .with("unhappy", "From {{prefix|en|un|happy}}.")
            .with("happy", "# Feeling joy.");

        let raw = decompose_raw(&source, "unhappy", 30).unwrap();
        assert_eq!(
            pieces(&raw),
            vec![("un-", Role::Prefix), ("happy", Role::BaseWord)]
        );

        let public = decompose(&source, "unhappy").unwrap();
        assert_eq!(
            pieces(&public),
            vec![("un", Role::Prefix), ("happy", Role::BaseWord)]
        );
    }

    #[test]
    fn test_malformed_affix_scenario() {
        let source = MapContentSource::new().with("foo", "{{affix|en|onlyonepart}}");
        let result = decompose_raw(&source, "foo", 30).unwrap();
        assert_eq!(pieces(&result), vec![("foo", Role::BaseWord)]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_cyclic_markup_hits_depth_bound() {
        let source = MapContentSource::new()
            .with("aaaa", "{{compound|en|aaab}}")
            .with("aaab", "{{compound|en|aaaa}}");
        let result = decompose_raw(&source, "aaaa", 30).unwrap();

        assert_eq!(result.pieces.len(), 1);
        assert_eq!(result.pieces[0].role, Role::BaseWord);
        assert!(matches!(
            result.diagnostics.as_slice(),
            [Diagnostic::DepthExceeded { max_depth: 30, .. }]
        ));
    }

    #[test]
    fn test_depth_counts_per_path() {
        let source = MapContentSource::new()
            .with("aaaa", "{{compound|en|aaab}}")
            .with("aaab", "{{compound|en|aaaa}}");
        let decomposer = Decomposer::new(&source)
            .with_options(DecomposeOptions::new().with_max_depth(3));
        let analysis = decomposer.analyze("aaaa").unwrap();
        assert_eq!(analysis.root.max_depth(), 4);
    }

    #[test]
    fn test_missing_word_is_leaf_with_diagnostic() {
        let source = MapContentSource::new();
        let result = decompose_raw(&source, "zzyzx", 30).unwrap();
        assert_eq!(pieces(&result), vec![("zzyzx", Role::BaseWord)]);
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::NotEnglishWord {
                word: "zzyzx".to_string()
            }]
        );
    }

    #[test]
    fn test_inflection_then_morphemes() {
        let source = MapContentSource::new()
            .with("unhappier", "# {{comparative of|en|unhappy}}")
            .with("unhappy", "From {{prefix|en|un|happy}}.")
            .with("happy", "# Feeling joy.");
        let result = decompose_raw(&source, "unhappier", 30).unwrap();
        assert_eq!(
            pieces(&result),
            vec![
                ("un-", Role::Prefix),
                ("happy", Role::BaseWord),
                ("er", Role::Inflection),
            ]
        );
    }

    #[test]
    fn test_nested_affixes() {
        let source = MapContentSource::new()
            .with("unhappiness", "From {{suffix|en|unhappy|ness}}.")
            .with("unhappy", "From {{prefix|en|un|happy}}.")
            .with("happy", "# Feeling joy.");
        let result = decompose(&source, "unhappiness").unwrap();
        assert_eq!(result.texts(), vec!["un", "happy", "ness"]);
    }

    #[test]
    fn test_ambiguous_morphemes_pick_strategy_order() {
        let source = MapContentSource::new()
            .with("rainbow", "{{af|en|rain|-bow}} {{compound|en|rain|bow}}")
            .with("rain", "# Water.");
        let result = decompose_raw(&source, "rainbow", 30).unwrap();
        assert_eq!(
            pieces(&result),
            vec![("rain", Role::BaseWord), ("-bow", Role::Suffix)]
        );
        assert!(matches!(
            result.diagnostics.as_slice(),
            [Diagnostic::AmbiguousBreakdown { candidates, .. }] if candidates.len() == 2
        ));
    }

    #[test]
    fn test_single_public_piece_is_base_word() {
        let source = MapContentSource::new().with("cat", "# A feline.");
        let result = decompose(&source, "cat").unwrap();
        assert_eq!(pieces(&result), vec![("cat", Role::BaseWord)]);
        assert!(result.is_leaf());
    }

    #[test]
    fn test_custom_registry_limits_strategies() {
        use crate::templates::{CompoundStrategy, StrategyRegistry};

        let source = MapContentSource::new()
            .with("unhappy", "From {{prefix|en|un|happy}}.")
            .with("rainbow", "From {{compound|en|rain|bow}}.");
        let mut registry = StrategyRegistry::new();
        registry.register(CompoundStrategy);
        let decomposer = Decomposer::new(&source).with_registry(registry);

        assert_eq!(decomposer.decompose("unhappy").unwrap().texts(), vec!["unhappy"]);
        assert_eq!(
            decomposer.decompose("rainbow").unwrap().texts(),
            vec!["rain", "bow"]
        );
        assert_eq!(decomposer.options(), DecomposeOptions::default());
    }

    #[test]
    fn test_inflection_stem_respects_depth_bound() {
        let source = MapContentSource::new()
            .with("cats", "# {{plural of|en|cat}}")
            .with("cat", "# A feline.");
        let result = decompose_raw(&source, "cats", 0).unwrap();

        assert_eq!(
            pieces(&result),
            vec![("cat", Role::BaseWord), ("s", Role::Inflection)]
        );
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::DepthExceeded {
                word: "cat".to_string(),
                max_depth: 0
            }]
        );
    }

    #[test]
    fn test_repeated_headings_in_child_entry() {
        let mut source = MapContentSource::new().with("rainbow", "From {{compound|en|rain|bow}}.");
        source.insert("rain", "# Water.");
        let bow = "==English==\n===Noun===\n# a weapon\n===Verb===\n# to bend\n===Noun===\n# a knot\n";
        assert!(source.insert_entry("bow", bow).unwrap());

        let result = decompose(&source, "rainbow").unwrap();
        assert_eq!(result.texts(), vec!["rain", "bow"]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_word() {
        let source = MapContentSource::new();
        assert!(decompose(&source, "").is_err());
        assert!(decompose(&source, "{{x}}").is_err());
    }
}
