//! Template signature matching and argument extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Inline modifiers such as `<t:gloss>` or `<id:sense>` attached to arguments.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INLINE_MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

/// Build the pattern for `{{kind|en|args...}}` with any of the given names.
///
/// Capture group 1 holds the raw argument list after the language code.
/// Nested templates inside the argument list are not supported.
///
/// # Panics
/// Panics if a kind name produces an invalid pattern; kind names are
/// escaped, so this only happens on programmer error.
#[allow(clippy::expect_used)] // Kind names are escaped literals
#[must_use]
pub fn template_pattern(kinds: &[&str]) -> Regex {
    let alternation = kinds
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"\{{\{{\s*(?:{alternation})\s*\|\s*en\s*\|([^{{}}]*)\}}\}}"
    ))
    .expect("valid template pattern")
}

/// Split a raw argument list into positional arguments.
///
/// Named arguments (containing `=`) are discarded, inline modifiers are
/// removed and blank arguments are skipped.
///
/// ```
/// use wordparts::templates::positional_args;
///
/// assert_eq!(
///     positional_args("un-|happy<t:glad>|-ness|pos=adjective"),
///     vec!["un-", "happy", "-ness"]
/// );
/// ```
#[must_use]
pub fn positional_args(raw: &str) -> Vec<String> {
    raw.split('|')
        .filter(|arg| !arg.contains('='))
        .map(|arg| INLINE_MODIFIER.replace_all(arg, "").trim().to_string())
        .filter(|arg| !arg.is_empty())
        .collect()
}

/// Positional arguments of the first template matching `pattern`.
#[must_use]
pub fn first_template_args(pattern: &Regex, content: &str) -> Option<Vec<String>> {
    let captures = pattern.captures(content)?;
    let raw = captures.get(1)?.as_str();
    Some(positional_args(raw))
}
