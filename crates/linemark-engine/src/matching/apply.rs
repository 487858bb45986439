use crate::patterns::{Category, PatternRegistry};

use super::span::Span;

/// One pattern that matched one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub pattern_name: String,
    pub category: Category,
    /// The line the pattern was applied to.
    pub line: &'a str,
    /// Every non-overlapping occurrence, left to right. Not used by the
    /// classifier; kept for span-level rendering.
    pub ranges: Vec<Span>,
}

/// Tests every pattern in `registry` against `line`.
///
/// Block and span patterns are not exclusive: a list item can also carry
/// emphasis. Results follow registry order, so the same input always gives
/// the same output.
pub fn apply<'a>(registry: &PatternRegistry, line: &'a str) -> Vec<Match<'a>> {
    registry
        .iter()
        .filter_map(|pattern| {
            let ranges = pattern.rule().find_spans(line);
            if ranges.is_empty() {
                return None;
            }
            Some(Match {
                pattern_name: pattern.name().to_string(),
                category: pattern.category(),
                line,
                ranges,
            })
        })
        .collect()
}

/// Applies the matcher to every line of a document, keeping line order.
#[cfg(not(feature = "parallel"))]
pub fn match_lines<'a>(registry: &PatternRegistry, lines: &[&'a str]) -> Vec<Vec<Match<'a>>> {
    lines.iter().map(|&line| apply(registry, line)).collect()
}

/// Applies the matcher to every line of a document, keeping line order.
///
/// Lines have no dependency on each other, so they are matched on the
/// rayon pool.
#[cfg(feature = "parallel")]
pub fn match_lines<'a>(registry: &PatternRegistry, lines: &[&'a str]) -> Vec<Vec<Match<'a>>> {
    use rayon::prelude::*;

    lines.par_iter().map(|&line| apply(registry, line)).collect()
}
