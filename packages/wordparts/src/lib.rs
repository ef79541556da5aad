//! wordparts - Decompose English words into labeled morphological pieces.
//!
//! Words are split by recursively reading the morphology templates of their
//! Wiktionary entries: inflectional endings first (`{{plural of|en|cat}}`),
//! then derivational morphemes (`{{prefix|en|un|happy}}`,
//! `{{compound|en|rain|bow}}`, ...), then each resulting base word again.
//!
//! # Example
//!
//! ```
//! use wordparts::{decompose, MapContentSource};
//!
//! let source = MapContentSource::new()
//!     .with("unhappy", "From {{prefix|en|un|happy}}.")
//!     .with("happy", "# Feeling joy.");
//!
//! let result = decompose(&source, "unhappy").unwrap();
//! assert_eq!(result.texts(), vec!["un", "happy"]);
//! ```
//!
//! # Architecture
//!
//! - [`sections`]: heading-delimited section splitting and joining
//! - [`english`]: English section extraction and cleanup
//! - [`templates`]: template strategies and the inflection table
//! - [`validate`]: acceptance checks for candidate breakdowns
//! - [`decompose`](mod@decompose): the recursive decomposer
//! - [`source`]: content sources (in-memory, live, snapshot)
//! - [`config`]: constants, validation and options
//! - [`types`]: pieces, roles and diagnostics
//! - [`error`]: error type and Result alias
//! - [`http`]: HTTP client used by the live source
//! - [`output`]: result rendering
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod decompose;
pub mod english;
pub mod error;
pub mod http;
pub mod output;
pub mod sections;
pub mod source;
pub mod templates;
pub mod types;
pub mod validate;

// Re-export main functions
pub use decompose::{decompose, decompose_raw, Analysis, Decomposer, DecompositionNode};

// Re-export commonly used items
pub use config::{validate_word, DecomposeOptions};
pub use error::{Result, WordpartsError};
pub use source::{ContentSource, MapContentSource, SnapshotContentSource, WiktionaryContentSource};
pub use types::{Breakdown, Decomposition, Diagnostic, Role, WordPiece};
