//! Heading-delimited section splitting and joining.
//!
//! Wikitext headings are lines wrapped in runs of `=` markers, where the run
//! length is the heading depth:
//!
//! ```text
//! ==English==          depth 2 (language)
//! ===Etymology 1===    depth 3
//! ====Noun====         depth 4
//! ```
//!
//! [`split`] cuts a document into the sections of one exact depth; deeper
//! headings stay inside the bodies. [`join`] is its inverse up to whitespace
//! normalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WordpartsError};

/// Synthetic name for text preceding the first heading.
pub const FRONT_MATTER: &str = "Front matter";

/// Character repeated around heading names.
pub const HEADING_MARKER: char = '=';

/// Runs of blank (or whitespace-only) lines.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("valid regex"));

/// One named section of a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub depth: usize,
    pub body: String,
}

impl Section {
    #[must_use]
    pub fn new(name: impl Into<String>, depth: usize, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depth,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_front_matter(&self) -> bool {
        self.name == FRONT_MATTER
    }
}

/// Ordered sections of one depth, addressable by heading name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    depth: usize,
    sections: Vec<Section>,
}

impl Sections {
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Body of the first section with the given heading name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    /// Heading names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Section> {
        self.sections.iter_mut()
    }

    /// Keep only sections matching the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&Section) -> bool) {
        self.sections.retain(keep);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    /// Recombine into markup. See [`join`].
    #[must_use]
    pub fn join(&self) -> String {
        join(&self.sections, self.depth)
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

/// A heading line found by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEvent {
    pub depth: usize,
    pub name: String,
    /// Byte offset of the heading line itself.
    pub line_start: usize,
    /// Byte offset of the first byte after the heading line.
    pub body_start: usize,
}

/// Parse a single line as a heading.
///
/// Returns `(depth, name)` when the line is wrapped by equally long runs of
/// markers around a non-empty name. Unbalanced lines are body text.
///
/// ```
/// use wordparts::sections::parse_heading;
///
/// assert_eq!(parse_heading("===Etymology 1==="), Some((3, "Etymology 1")));
/// assert_eq!(parse_heading("== English ==  "), Some((2, "English")));
/// assert_eq!(parse_heading("==Noun==="), None);
/// assert_eq!(parse_heading("# a definition"), None);
/// ```
#[must_use]
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let line = line.trim_end();
    let leading = line.chars().take_while(|&c| c == HEADING_MARKER).count();
    if leading == 0 {
        return None;
    }
    let trailing = line.chars().rev().take_while(|&c| c == HEADING_MARKER).count();
    if leading != trailing || leading + trailing >= line.len() {
        return None;
    }

    // Markers are ASCII, so counts are byte offsets
    let name = line[leading..line.len() - trailing].trim();
    if name.is_empty() {
        return None;
    }
    Some((leading, name))
}

/// Scan a document line by line and emit every heading, at any depth.
#[must_use]
pub fn tokenize(doc: &str) -> Vec<HeadingEvent> {
    let mut events = Vec::new();
    let mut offset = 0;

    for line in doc.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if let Some((depth, name)) = parse_heading(line) {
            events.push(HeadingEvent {
                depth,
                name: name.to_string(),
                line_start,
                body_start: offset,
            });
        }
    }

    events
}

/// Split a document into the sections at exactly `depth`.
///
/// Text before the first heading is kept as [`FRONT_MATTER`] when
/// `keep_first` is set and it is not blank; otherwise it is dropped.
/// Returns an empty mapping when no heading of that depth exists.
///
/// Repeated sibling names are kept as separate sections in document order.
///
/// # Errors
/// `StructuralMismatch` when heading names cannot be paired one to one with
/// body segments.
pub fn split(doc: &str, depth: usize, keep_first: bool) -> Result<Sections> {
    let events: Vec<HeadingEvent> = tokenize(doc)
        .into_iter()
        .filter(|e| e.depth == depth)
        .collect();

    let Some(first) = events.first() else {
        return Ok(Sections {
            depth,
            sections: Vec::new(),
        });
    };

    let mut sections = Vec::with_capacity(events.len() + 1);

    let front = &doc[..first.line_start];
    if keep_first && !front.trim().is_empty() {
        sections.push(Section::new(FRONT_MATTER, depth, front));
    }

    let ends = events
        .iter()
        .skip(1)
        .map(|e| e.line_start)
        .chain(std::iter::once(doc.len()));
    let segments: Vec<&str> = events
        .iter()
        .zip(ends)
        .map(|(event, end)| &doc[event.body_start..end])
        .collect();

    if events.len() != segments.len() {
        return Err(WordpartsError::StructuralMismatch {
            depth,
            headings: events.len(),
            segments: segments.len(),
        });
    }

    for (event, body) in events.iter().zip(segments) {
        sections.push(Section::new(event.name.clone(), depth, body));
    }

    Ok(Sections { depth, sections })
}

/// Recombine sections into markup at `depth`.
///
/// Each named section is re-wrapped in `depth` markers and followed by its
/// trimmed body; front matter is emitted as-is. Runs of blank lines collapse
/// to a single newline and the result is trimmed.
#[must_use]
pub fn join(sections: &[Section], depth: usize) -> String {
    let markers = HEADING_MARKER.to_string().repeat(depth);
    let mut out = String::new();

    for section in sections {
        if !section.is_front_matter() {
            out.push_str(&markers);
            out.push_str(&section.name);
            out.push_str(&markers);
            out.push('\n');
        }
        out.push_str(section.body.trim());
        out.push('\n');
    }

    BLANK_LINES.replace_all(&out, "\n").trim().to_string()
}
