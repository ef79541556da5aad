//! Recursive decomposition of words into labeled pieces.

mod engine;
mod node;

pub use engine::{decompose, decompose_raw, Analysis, Decomposer};
pub use node::{Branch, DecompositionNode};
