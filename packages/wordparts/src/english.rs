//! Extraction of the English section of an entry and removal of the
//! subsections that never carry morphology templates.

use crate::error::Result;
use crate::sections::{self, Section};

/// Heading depth of language sections.
pub const LANGUAGE_DEPTH: usize = 2;

/// Name of the language section we analyze.
pub const ENGLISH: &str = "English";

/// Subsections dropped before template matching.
///
/// They list other words (synonyms, translations, derived terms) whose
/// templates would otherwise be mistaken for the entry's own morphology.
pub const IRRELEVANT_SECTIONS: &[&str] = &[
    "Anagrams",
    "Antonyms",
    "Derived terms",
    "Descendants",
    "Hyponyms",
    "Pronunciation",
    "References",
    "Related terms",
    "See also",
    "Synonyms",
    "Translations",
];

/// Return the body of the English language section, if the entry has one.
pub fn extract_english(doc: &str) -> Result<Option<String>> {
    let languages = sections::split(doc, LANGUAGE_DEPTH, false)?;
    Ok(languages.get(ENGLISH).map(str::to_string))
}

/// Recursively strip irrelevant subsections, starting at heading `depth`.
///
/// Children are cleaned first, then irrelevant siblings are removed and the
/// survivors are rejoined. Text without headings at `depth` is returned
/// unchanged.
pub fn drop_irrelevant(section: &str, depth: usize) -> Result<String> {
    let mut subsections = sections::split(section, depth, true)?;
    if subsections.is_empty() {
        return Ok(section.to_string());
    }

    for child in subsections.iter_mut() {
        if !child.is_front_matter() {
            child.body = drop_irrelevant(&child.body, depth + 1)?;
        }
    }

    subsections.retain(|s| !is_irrelevant(s));
    Ok(subsections.join())
}

/// English section of an entry with irrelevant subsections removed.
///
/// This is the normalized markup every strategy is matched against.
pub fn english_content(doc: &str) -> Result<Option<String>> {
    let Some(english) = extract_english(doc)? else {
        return Ok(None);
    };
    drop_irrelevant(&english, LANGUAGE_DEPTH + 1).map(Some)
}

/// Whether a subsection should be dropped.
///
/// Besides the fixed list, any numbered heading other than number 1 is
/// dropped ("Etymology 2", "Noun 3"); only the first sense is analyzed.
fn is_irrelevant(section: &Section) -> bool {
    if section.is_front_matter() {
        return false;
    }
    if IRRELEVANT_SECTIONS.contains(&section.name.as_str()) {
        return true;
    }
    matches!(heading_number(&section.name), Some(n) if n != 1)
}

/// Trailing sense number of a heading such as "Etymology 2".
fn heading_number(name: &str) -> Option<u32> {
    let (_, number) = name.rsplit_once(' ')?;
    number.parse().ok()
}
