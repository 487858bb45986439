use crate::matching::LineMatchSet;

use super::types::{Carry, LineClassification, LineType, Lookahead, Next};

/// Local facts for one line, gathered before the forward scan.
#[derive(Debug, Clone)]
struct LocalFacts {
    names: Vec<String>,
    safe: bool,
}

impl LocalFacts {
    fn of(set: &LineMatchSet) -> Self {
        Self {
            names: set.names().map(str::to_owned).collect(),
            safe: set.is_safe(),
        }
    }
}

/// Assigns a [`LineType`] to every line of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphClassifier {
    lookahead: Lookahead,
}

impl ParagraphClassifier {
    pub fn new(lookahead: Lookahead) -> Self {
        Self { lookahead }
    }

    pub fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    /// Classifies every line. `sets[i]` holds the matches of line `i`; the
    /// result holds exactly one record per line in the same order.
    pub fn classify(&self, sets: &[LineMatchSet]) -> Vec<LineClassification> {
        let facts: Vec<LocalFacts> = sets.iter().map(LocalFacts::of).collect();

        let mut out = Vec::with_capacity(sets.len());
        let mut prev = Carry::Start;

        for (idx, (set, fact)) in sets.iter().zip(facts).enumerate() {
            let next = self.peek(sets, idx);
            let line_type = decide(prev, fact.safe, next);
            log::trace!(
                "line {idx}: {:?} safe={} prev={prev:?} next={next:?} => {line_type}",
                fact.names,
                fact.safe
            );

            out.push(LineClassification {
                line_index: idx,
                matched_names: fact.names,
                safe: fact.safe,
                line_type,
            });
            prev = match self.lookahead {
                Lookahead::EveryLine => Carry::after(set),
                Lookahead::FirstLineOnly => Carry::after_legacy(prev, set),
            };
        }

        log::debug!(
            "classified {} lines with {:?} lookahead",
            out.len(),
            self.lookahead
        );
        out
    }

    /// Lookahead for line `idx`. `None` on the last line, and wherever the
    /// following line is a single non-linebreak match.
    fn peek(&self, sets: &[LineMatchSet], idx: usize) -> Option<Next> {
        let current = &sets[idx];
        let next = sets.get(idx + 1)?;

        if next.len() == 1 {
            return next.is_linebreak().then_some(Next::Newline);
        }

        if self.lookahead == Lookahead::FirstLineOnly && idx != 0 {
            return None;
        }

        if current.is_bare_block() && next.is_bare_block() {
            Some(Next::Block)
        } else {
            Some(Next::Span)
        }
    }
}

fn decide(prev: Carry, safe: bool, next: Option<Next>) -> LineType {
    match (prev, safe) {
        (Carry::Start | Carry::Span, true) => LineType::ParagraphInternal,
        (Carry::Newline, true) => LineType::ParagraphStart,
        _ => match next {
            Some(Next::Newline | Next::Block) => LineType::ParagraphEnd,
            Some(Next::Span) | None => LineType::BlockStartEnd,
        },
    }
}
