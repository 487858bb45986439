use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

use crate::matching::Span;

use super::set::{Category, PatternSet, RuleSource};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Pattern '{name}' is not a valid regular expression: {source}")]
    InvalidPattern {
        name: String,
        source: regex::Error,
    },

    #[error("Pattern '{name}' is configured as both a block and a span pattern")]
    DuplicateName { name: String },
}

/// Capture group that narrows a match to the reported span. Lets a rule
/// consume a boundary character without including it in the range.
pub const SPAN_GROUP: &str = "span";

/// A compiled matching rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Regex(Regex),
    /// Placeholder for a slot that has no implementation yet.
    Reserved,
}

impl Rule {
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Rule::Regex(re) => re.is_match(line),
            Rule::Reserved => false,
        }
    }

    /// Byte spans of every non-overlapping match in `line`, left to right.
    ///
    /// When the rule has a capture group named [`SPAN_GROUP`], the span is
    /// that group rather than the whole match.
    pub fn find_spans(&self, line: &str) -> Vec<Span> {
        match self {
            Rule::Regex(re) => re
                .captures_iter(line)
                .filter_map(|caps| caps.name(SPAN_GROUP).or_else(|| caps.get(0)))
                .map(|m| Span {
                    start: m.start(),
                    end: m.end(),
                })
                .collect(),
            Rule::Reserved => Vec::new(),
        }
    }
}

/// A named, categorised, compiled pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    category: Category,
    rule: Rule,
}

impl Pattern {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }
}

/// Every pattern of a [`PatternSet`], compiled once and read-only afterwards.
///
/// Patterns are stored block first, then span, each sorted by name. That
/// order is what the matcher walks, so match output is stable across runs.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
    categories: BTreeMap<String, Category>,
}

impl PatternRegistry {
    /// Compiles both tables of `set`.
    ///
    /// # Errors
    /// Fails on the first rule that is not a valid regular expression, or if
    /// a name appears in both tables.
    pub fn compile(set: &PatternSet) -> Result<Self, RegistryError> {
        let mut patterns = Vec::with_capacity(set.len());
        let mut categories = BTreeMap::new();

        for category in [Category::Block, Category::Span] {
            for (name, source) in set.table(category) {
                if categories.insert(name.clone(), category).is_some() {
                    return Err(RegistryError::DuplicateName { name: name.clone() });
                }

                let rule = match source {
                    RuleSource::Regex(expr) => {
                        let re = Regex::new(expr).map_err(|source| {
                            RegistryError::InvalidPattern {
                                name: name.clone(),
                                source,
                            }
                        })?;
                        Rule::Regex(re)
                    }
                    RuleSource::Reserved => Rule::Reserved,
                };
                log::debug!("compiled {category:?} pattern {name} => {source:?}");

                patterns.push(Pattern {
                    name: name.clone(),
                    category,
                    rule,
                });
            }
        }

        Ok(Self {
            patterns,
            categories,
        })
    }

    /// Compiles [`PatternSet::builtin`].
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::compile(&PatternSet::builtin())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn category(&self, name: &str) -> Option<Category> {
        self.categories.get(name).copied()
    }

    /// Names registered under `category`, sorted.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(move |p| p.category == category)
            .map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.len(), PatternSet::builtin().len());
    }

    #[test]
    fn order_is_block_then_span_sorted_by_name() {
        let registry = PatternRegistry::builtin().unwrap();
        let order: Vec<_> = registry.iter().map(|p| (p.category(), p.name())).collect();

        let block_end = order
            .iter()
            .rposition(|(c, _)| *c == Category::Block)
            .unwrap();
        assert!(order[..=block_end].iter().all(|(c, _)| *c == Category::Block));
        assert!(order[block_end + 1..].iter().all(|(c, _)| *c == Category::Span));

        let span: Vec<_> = registry.names(Category::Span).collect();
        assert_eq!(
            span,
            vec!["autolink", "em", "escape", "img", "inlinecode", "link", "strong"]
        );
    }

    #[test]
    fn reserved_slots_are_registered_and_never_match() {
        let registry = PatternRegistry::builtin().unwrap();
        for slot in ["img", "escape", "autolink"] {
            let pattern = registry.get(slot).unwrap();
            assert_eq!(pattern.category(), Category::Span);
            assert!(!pattern.rule().is_match("![alt](src.png) \\* <http://x>"));
            assert!(!pattern.rule().is_match(""));
        }
    }

    #[test]
    fn category_lookup() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.category("ul"), Some(Category::Block));
        assert_eq!(registry.category("strong"), Some(Category::Span));
        assert_eq!(registry.category("nope"), None);
    }

    #[test]
    fn invalid_regex_is_rejected_with_name() {
        let mut set = PatternSet::builtin();
        set.insert(Category::Span, "broken", RuleSource::regex("(unclosed"));

        let err = PatternRegistry::compile(&set).unwrap_err();
        match err {
            RegistryError::InvalidPattern { ref name, .. } => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("'broken'"));
    }

    #[test]
    fn name_in_both_tables_is_rejected() {
        let mut set = PatternSet::builtin();
        set.insert(Category::Span, "ul", RuleSource::regex("x"));

        let err = PatternRegistry::compile(&set).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { ref name } if name == "ul"));
    }

    #[test]
    fn empty_set_compiles_to_empty_registry() {
        let registry = PatternRegistry::compile(&PatternSet::default()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn find_spans_reports_every_occurrence() {
        let registry = PatternRegistry::builtin().unwrap();
        let code = registry.get("inlinecode").unwrap();
        assert_eq!(
            code.rule().find_spans("a `b` c `d`"),
            vec![Span { start: 2, end: 5 }, Span { start: 8, end: 11 }]
        );
    }

    #[test]
    fn span_group_narrows_reported_range() {
        let registry = PatternRegistry::builtin().unwrap();
        let em = registry.get("em").unwrap();
        assert_eq!(
            em.rule().find_spans("x *a* *b*"),
            vec![Span { start: 2, end: 5 }, Span { start: 6, end: 9 }]
        );
        assert_eq!(
            em.rule().find_spans("**bold** and *soft*"),
            vec![Span { start: 13, end: 19 }]
        );
        assert!(em.rule().find_spans("__bold__").is_empty());
    }
}
