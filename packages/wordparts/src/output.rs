//! Rendering of decomposition results.

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Decomposition;

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One piece per line: `text<TAB>role`.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

/// Render a decomposition in the requested format.
pub fn render(decomposition: &Decomposition, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(decomposition)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(decomposition)?),
        OutputFormat::Yaml => Ok(serde_yaml_ng::to_string(decomposition)?),
    }
}

/// Tab-separated pieces followed by `# ` prefixed diagnostics.
#[must_use]
pub fn render_text(decomposition: &Decomposition) -> String {
    let mut lines: Vec<String> = decomposition
        .pieces
        .iter()
        .map(|p| format!("{}\t{}", p.text, p.role))
        .collect();
    lines.extend(decomposition.diagnostics.iter().map(|d| format!("# {d}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Diagnostic, WordPiece};
    use pretty_assertions::assert_eq;

    fn sample() -> Decomposition {
        Decomposition {
            word: "cats".to_string(),
            pieces: vec![WordPiece::base("cat"), WordPiece::inflection("s")],
            diagnostics: vec![Diagnostic::NotEnglishWord {
                word: "cat".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&sample()),
            "cat\tbase_word\ns\tinflection\n# 'cat' has no English entry"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pieces"][1]["role"], "inflection");
        assert_eq!(value["diagnostics"][0]["kind"], "not_english_word");
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("word: cats"));
        assert!(yaml.contains("role: base_word"));
    }

    #[test]
    fn test_render_json_omits_empty_diagnostics() {
        let mut decomposition = sample();
        decomposition.diagnostics.clear();
        let json = render(&decomposition, OutputFormat::Json).unwrap();
        assert!(!json.contains("diagnostics"));
    }
}
