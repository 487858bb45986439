use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::LineMatchSet;

/// Structural role of a line relative to paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// First line of a paragraph, directly after an empty line.
    ParagraphStart,
    /// Continues the paragraph opened on an earlier line.
    ParagraphInternal,
    /// Block line followed by an empty line or another block line.
    ParagraphEnd,
    /// Self-contained block line.
    BlockStartEnd,
}

impl LineType {
    pub fn as_str(self) -> &'static str {
        match self {
            LineType::ParagraphStart => "paragraph_start",
            LineType::ParagraphInternal => "paragraph_internal",
            LineType::ParagraphEnd => "paragraph_end",
            LineType::BlockStartEnd => "block_start_end",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final record for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineClassification {
    /// Zero-based index of the line in the document.
    pub line_index: usize,
    /// Matched pattern names, sorted.
    pub matched_names: Vec<String>,
    /// Whether the line may be folded into an ongoing paragraph.
    pub safe: bool,
    pub line_type: LineType,
}

/// Which lines get a lookahead during the forward scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lookahead {
    /// Every line looks at the line after it.
    #[default]
    EveryLine,
    /// Legacy output: only line 0 gets the block/span lookahead, and a line
    /// with a single non-linebreak match leaves the carry as it was. Every
    /// line still sees an upcoming empty line.
    FirstLineOnly,
}

/// What the scan remembers about the previous line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    /// Before the first line.
    Start,
    /// An empty line.
    Newline,
    /// A line with block markers and no inline content.
    Block,
    /// Anything else: plain text, inline markup, or a mix.
    Span,
}

impl Carry {
    /// State after a line with the given matches.
    pub fn after(set: &LineMatchSet) -> Self {
        if set.is_linebreak() {
            Carry::Newline
        } else if set.is_bare_block() {
            Carry::Block
        } else {
            Carry::Span
        }
    }

    /// Legacy state update: a lone non-linebreak match keeps `prev`.
    pub fn after_legacy(prev: Carry, set: &LineMatchSet) -> Self {
        if set.len() == 1 && !set.is_linebreak() {
            prev
        } else {
            Carry::after(set)
        }
    }
}

/// One-line preview of the following line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Newline,
    Block,
    Span,
}
