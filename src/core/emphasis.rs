//! # Emphasis Markers
//!
//! The upstream service marks bold text with paired `**` delimiters.
//! [`parse`] turns a reply into a flat list of [`Segment`]s so the UI can
//! style them as spans. Nothing in a reply is ever interpreted as markup.
//!
//! ```text
//! "Take **rest** and drink water"
//!   → [Plain("Take "), Strong("rest"), Plain(" and drink water")]
//! ```
//!
//! Matching rules:
//! - An opener pairs with the nearest closer on the same line.
//! - A `**` with no closer on its line stays literal.
//! - An empty pair (`****`) emits nothing.

const MARKER: &str = "**";

/// One run of text with a single presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

impl Segment {
    /// The raw text of this run, without styling.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Strong(s) => s,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Segment::Strong(_))
    }
}

/// Split `text` into plain and strong runs.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for line in text.split_inclusive('\n') {
        parse_line(line, &mut segments);
    }
    segments
}

/// Scan one line (possibly ending in `\n`) for marker pairs.
fn parse_line(line: &str, out: &mut Vec<Segment>) {
    let mut rest = line;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            break;
        };

        push_plain(out, &rest[..open]);
        let inner = &after_open[..close];
        if !inner.is_empty() {
            out.push(Segment::Strong(inner.to_string()));
        }
        rest = &after_open[close + MARKER.len()..];
    }

    push_plain(out, rest);
}

/// Append plain text, merging with a trailing plain run.
fn push_plain(out: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Plain(last)) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(Segment::Plain(text.to_string()));
    }
}

/// Concatenate the raw text of all segments.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
