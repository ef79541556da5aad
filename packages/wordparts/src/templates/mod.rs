//! Template-driven extraction of morphemes and inflectional endings.
//!
//! Morphology in Wiktionary lives in etymology templates such as
//! `{{prefix|en|un|happy}}` and in form-of templates such as
//! `{{plural of|en|cat}}`. Each template kind has its own strategy; the
//! registry runs them in a fixed order and [`select`] validates the
//! candidates and breaks ties.

mod args;
mod inflection;
mod registry;
mod select;
mod strategy;

pub use args::{first_template_args, positional_args, template_pattern};
pub use inflection::{
    inflection_rules, is_irregular, InflectionEndings, InflectionRule, IRREGULAR_MARKER,
};
pub use registry::{create_morpheme_registry, StrategyRegistry};
pub use select::{select, Selection};
pub use strategy::{
    AffixStrategy, AlternativeSpellingStrategy, CompoundStrategy, ConfixStrategy,
    PrefixStrategy, SuffixStrategy, TemplateStrategy,
};
