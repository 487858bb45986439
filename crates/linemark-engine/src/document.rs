use crate::classify::{LineClassification, Lookahead, ParagraphClassifier};
use crate::matching::{LineMatchSet, Match, match_lines};
use crate::patterns::PatternRegistry;

/// A document after matching and classification.
#[derive(Debug, Clone)]
pub struct ClassifiedDoc<'a> {
    pub lines: Vec<&'a str>,
    /// Raw matches per line, including ranges.
    pub matches: Vec<Vec<Match<'a>>>,
    pub classifications: Vec<LineClassification>,
}

impl ClassifiedDoc<'_> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, line_index: usize) -> Option<&LineClassification> {
        self.classifications.get(line_index)
    }
}

/// Splits source text on `\n`.
///
/// An empty source has no lines. A trailing newline leaves a trailing empty
/// line, and a `\r` before each `\n` stays on its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Matches every line against `registry` and classifies the result.
pub fn classify_document<'a>(
    registry: &PatternRegistry,
    lines: &[&'a str],
    lookahead: Lookahead,
) -> ClassifiedDoc<'a> {
    let matches = match_lines(registry, lines);
    let sets: Vec<LineMatchSet> = matches
        .iter()
        .map(|m| LineMatchSet::from_matches(m))
        .collect();
    let classifications = ParagraphClassifier::new(lookahead).classify(&sets);

    ClassifiedDoc {
        lines: lines.to_vec(),
        matches,
        classifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LineType;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("one", &["one"])]
    #[case("one\n", &["one", ""])]
    #[case("a\n\nb", &["a", "", "b"])]
    #[case("a\r\nb", &["a\r", "b"])]
    #[case("\n", &["", ""])]
    fn split(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(split_lines(text), expected);
    }

    #[test]
    fn heading_and_paragraph_document() {
        let registry = PatternRegistry::builtin().unwrap();
        let lines = ["# Title", "", "Some text.", "More text."];
        let doc = classify_document(&registry, &lines, Lookahead::EveryLine);

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get(0).unwrap().matched_names, vec!["heading1"]);
        assert!(!doc.get(0).unwrap().safe);
        assert_eq!(doc.get(1).unwrap().matched_names, vec!["linebreak"]);
        assert_eq!(doc.get(2).unwrap().line_type, LineType::ParagraphStart);
        assert_eq!(doc.get(3).unwrap().line_type, LineType::ParagraphInternal);
        assert!(doc.get(4).is_none());
    }

    #[test]
    fn list_document() {
        let registry = PatternRegistry::builtin().unwrap();
        let lines = ["- item one", "- item two"];
        let doc = classify_document(&registry, &lines, Lookahead::EveryLine);

        for c in &doc.classifications {
            assert_eq!(c.matched_names, vec!["ul"]);
            assert!(!c.safe);
            assert_eq!(c.line_type, LineType::BlockStartEnd);
        }
    }

    #[test]
    fn empty_document() {
        let registry = PatternRegistry::builtin().unwrap();
        let doc = classify_document(&registry, &split_lines(""), Lookahead::EveryLine);
        assert!(doc.is_empty());
        assert!(doc.classifications.is_empty());
        assert!(doc.matches.is_empty());
    }

    #[test]
    fn crlf_blank_lines_still_separate_paragraphs() {
        let registry = PatternRegistry::builtin().unwrap();
        let text = "# T\r\n\r\nbody\r\n";
        let doc = classify_document(&registry, &split_lines(text), Lookahead::EveryLine);

        let types: Vec<_> = doc.classifications.iter().map(|c| c.line_type).collect();
        assert_eq!(
            types,
            vec![
                LineType::ParagraphEnd,
                LineType::BlockStartEnd,
                LineType::ParagraphStart,
                LineType::BlockStartEnd,
            ]
        );
    }

    #[test]
    fn classifying_twice_is_identical() {
        let registry = PatternRegistry::builtin().unwrap();
        let text = "- *a* [b](c)\n> `d` **e**\n\n---\n1. f _g_\nplain";
        let lines = split_lines(text);
        let a = classify_document(&registry, &lines, Lookahead::EveryLine);
        let b = classify_document(&registry, &lines, Lookahead::EveryLine);
        assert_eq!(a.classifications, b.classifications);
    }
}
