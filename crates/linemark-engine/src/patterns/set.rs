use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the block pattern matching an empty line.
///
/// The classifier treats a line whose only match is this pattern as a
/// paragraph separator.
pub const LINEBREAK: &str = "linebreak";

/// The family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Line-level structural marker (heading, list, quote, rule, fence).
    Block,
    /// Inline decoration inside a line's content (emphasis, code, link).
    Span,
}

/// Textual form of a single rule.
///
/// In TOML a regex rule is written `name = { regex = "^>" }` and a reserved
/// slot as `name = "reserved"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    /// A regular expression tested against the whole line.
    Regex(String),
    /// A named slot that is registered but never matches.
    Reserved,
}

impl RuleSource {
    pub fn regex(expr: impl Into<String>) -> Self {
        Self::Regex(expr.into())
    }
}

/// The two pattern tables, keyed by pattern name.
///
/// This is plain configuration: nothing is compiled until it is handed to
/// [`PatternRegistry::compile`](super::PatternRegistry::compile).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    #[serde(default)]
    pub block: BTreeMap<String, RuleSource>,
    #[serde(default)]
    pub span: BTreeMap<String, RuleSource>,
}

impl PatternSet {
    /// The default block and span tables.
    pub fn builtin() -> Self {
        let block = [
            ("heading1", RuleSource::regex(r"^#(\s|$)")),
            ("heading2", RuleSource::regex(r"^##(\s|$)")),
            ("heading3", RuleSource::regex(r"^###(\s|$)")),
            (LINEBREAK, RuleSource::regex(r"^[\r\n]*$")),
            // single level only
            ("blockquote", RuleSource::regex(r"^>")),
            // no fence pairing, every fence line matches on its own
            ("codeblock", RuleSource::regex(r"^```")),
            ("ul", RuleSource::regex(r"^[-*+](\s|$)")),
            ("ol", RuleSource::regex(r"^[0-9]+\.(\s|$)")),
            (
                "hr",
                RuleSource::regex(r"^ {0,3}((-\s*){3,}|(\*\s*){3,}|(_\s*){3,})$"),
            ),
        ];

        let span = [
            // a doubled marker is strong, not em
            (
                "em",
                RuleSource::regex(r"(?:^|[^*_])(?P<span>\*[^*]+\*|_[^_]+_)"),
            ),
            ("strong", RuleSource::regex(r"\*\*[^*]+\*\*|__[^_]+__")),
            ("link", RuleSource::regex(r"\[[^\]]*\]\([^)]*\)")),
            ("inlinecode", RuleSource::regex(r"`[^`]+`")),
            ("img", RuleSource::Reserved),
            ("escape", RuleSource::Reserved),
            ("autolink", RuleSource::Reserved),
        ];

        Self {
            block: to_table(block),
            span: to_table(span),
        }
    }

    /// Returns the table for `category`.
    pub fn table(&self, category: Category) -> &BTreeMap<String, RuleSource> {
        match category {
            Category::Block => &self.block,
            Category::Span => &self.span,
        }
    }

    /// Adds or replaces a rule in the given category.
    pub fn insert(&mut self, category: Category, name: impl Into<String>, rule: RuleSource) {
        let table = match category {
            Category::Block => &mut self.block,
            Category::Span => &mut self.span,
        };
        table.insert(name.into(), rule);
    }

    /// Layers `other` on top of `self`, replacing rules with the same name
    /// in the same category.
    pub fn merge(&mut self, other: &PatternSet) {
        for (name, rule) in &other.block {
            self.insert(Category::Block, name.clone(), rule.clone());
        }
        for (name, rule) in &other.span {
            self.insert(Category::Span, name.clone(), rule.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.block.len() + self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty() && self.span.is_empty()
    }
}

fn to_table<const N: usize>(entries: [(&str, RuleSource); N]) -> BTreeMap<String, RuleSource> {
    entries
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect()
}
