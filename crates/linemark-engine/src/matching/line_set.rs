use std::collections::BTreeMap;

use crate::patterns::{Category, LINEBREAK};

use super::apply::Match;

/// The pattern names that matched one line, with their categories.
///
/// Backed by a sorted map so every derived value (name lists, the safety
/// scan) sees names in the same order regardless of match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMatchSet {
    entries: BTreeMap<String, Category>,
}

impl LineMatchSet {
    pub fn from_matches(matches: &[Match<'_>]) -> Self {
        matches
            .iter()
            .map(|m| (m.pattern_name.clone(), m.category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Matched names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.entries.values().any(|c| *c == category)
    }

    /// True when `name` is the only match.
    pub fn is_only(&self, name: &str) -> bool {
        self.entries.len() == 1 && self.contains(name)
    }

    /// True for an empty line: the only match is `linebreak`.
    pub fn is_linebreak(&self) -> bool {
        self.is_only(LINEBREAK)
    }

    /// At least one block name and no span name.
    pub fn is_bare_block(&self) -> bool {
        self.has_category(Category::Block) && !self.has_category(Category::Span)
    }

    /// A line is safe to fold into a paragraph unless it carries a block
    /// marker. Unmatched lines are safe.
    pub fn is_safe(&self) -> bool {
        !self.has_category(Category::Block)
    }
}

impl<S: Into<String>> FromIterator<(S, Category)> for LineMatchSet {
    fn from_iter<I: IntoIterator<Item = (S, Category)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, category)| (name.into(), category))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::apply;
    use crate::patterns::PatternRegistry;

    fn set(entries: &[(&str, Category)]) -> LineMatchSet {
        entries.iter().copied().collect()
    }

    #[test]
    fn empty_set_is_safe() {
        let s = LineMatchSet::default();
        assert!(s.is_safe());
        assert!(!s.is_bare_block());
        assert!(!s.is_linebreak());
    }

    #[test]
    fn span_only_set_is_safe() {
        let s = set(&[("em", Category::Span), ("link", Category::Span)]);
        assert!(s.is_safe());
        assert!(!s.is_bare_block());
    }

    #[test]
    fn any_block_name_makes_line_unsafe() {
        assert!(!set(&[("ul", Category::Block)]).is_safe());
        assert!(!set(&[("ul", Category::Block), ("em", Category::Span)]).is_safe());
        assert!(!set(&[("hr", Category::Block), ("ul", Category::Block)]).is_safe());
    }

    #[test]
    fn bare_block_requires_no_span() {
        assert!(set(&[("ol", Category::Block)]).is_bare_block());
        assert!(!set(&[("ol", Category::Block), ("strong", Category::Span)]).is_bare_block());
    }

    #[test]
    fn linebreak_must_be_alone() {
        assert!(set(&[(LINEBREAK, Category::Block)]).is_linebreak());
        assert!(!set(&[(LINEBREAK, Category::Block), ("hr", Category::Block)]).is_linebreak());
    }

    #[test]
    fn names_are_sorted_regardless_of_insert_order() {
        let a = set(&[("ul", Category::Block), ("em", Category::Span)]);
        let b = set(&[("em", Category::Span), ("ul", Category::Block)]);
        assert_eq!(a, b);
        assert_eq!(a.names().collect::<Vec<_>>(), vec!["em", "ul"]);
    }

    #[test]
    fn from_matches_keeps_categories() {
        let registry = PatternRegistry::builtin().unwrap();
        let s = LineMatchSet::from_matches(&apply(&registry, "> `x`"));
        assert_eq!(s.len(), 2);
        assert!(s.contains("blockquote"));
        assert!(s.contains("inlinecode"));
        assert!(s.has_category(Category::Block));
        assert!(s.has_category(Category::Span));
    }
}
