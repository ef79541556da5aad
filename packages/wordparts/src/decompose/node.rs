//! Decomposition tree.

use crate::types::WordPiece;

/// Child of a [`DecompositionNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// A base word that was analyzed further.
    Node(DecompositionNode),
    /// An affix kept as-is.
    Piece(WordPiece),
}

/// Analysis of one word at one recursion depth.
///
/// A node without children is terminal: the word itself is a base word.
/// Each node owns its children; decomposition never shares subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionNode {
    pub word: String,
    pub depth: usize,
    pub children: Vec<Branch>,
    /// Inflectional ending split off before morpheme analysis.
    pub inflection: Option<WordPiece>,
}

impl DecompositionNode {
    /// Terminal node for a word that is not split further.
    #[must_use]
    pub fn leaf(word: impl Into<String>, depth: usize) -> Self {
        Self {
            word: word.into(),
            depth,
            children: Vec::new(),
            inflection: None,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pieces in positional order, with the inflection last.
    #[must_use]
    pub fn flatten(&self) -> Vec<WordPiece> {
        let mut pieces = Vec::new();
        self.flatten_into(&mut pieces);
        pieces
    }

    fn flatten_into(&self, pieces: &mut Vec<WordPiece>) {
        if self.is_leaf() {
            pieces.push(WordPiece::base(self.word.as_str()));
        }
        for child in &self.children {
            match child {
                Branch::Node(node) => node.flatten_into(pieces),
                Branch::Piece(piece) => pieces.push(piece.clone()),
            }
        }
        if let Some(inflection) = &self.inflection {
            pieces.push(inflection.clone());
        }
    }

    /// Deepest recursion level reached below (and including) this node.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .filter_map(|child| match child {
                Branch::Node(node) => Some(node.max_depth()),
                Branch::Piece(_) => None,
            })
            .max()
            .unwrap_or(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_flatten() {
        let node = DecompositionNode::leaf("cat", 0);
        assert!(node.is_leaf());
        assert_eq!(node.flatten(), vec![WordPiece::base("cat")]);
        assert_eq!(node.max_depth(), 0);
    }

    #[test]
    fn test_leaf_with_inflection() {
        let mut node = DecompositionNode::leaf("walk", 0);
        node.inflection = Some(WordPiece::inflection("ed"));
        assert_eq!(
            node.flatten(),
            vec![WordPiece::base("walk"), WordPiece::inflection("ed")]
        );
    }

    #[test]
    fn test_nested_flatten_order() {
        // unhappinesses → un- + (happy) + -ness, plural s
        let node = DecompositionNode {
            word: "unhappinesses".to_string(),
            depth: 0,
            children: vec![
                Branch::Piece(WordPiece::prefix("un")),
                Branch::Node(DecompositionNode::leaf("happy", 1)),
                Branch::Piece(WordPiece::suffix("ness")),
            ],
            inflection: Some(WordPiece::inflection("s")),
        };
        assert_eq!(
            node.flatten(),
            vec![
                WordPiece::prefix("un"),
                WordPiece::base("happy"),
                WordPiece::suffix("ness"),
                WordPiece::inflection("s"),
            ]
        );
        assert_eq!(node.max_depth(), 1);
    }
}
