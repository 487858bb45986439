use crate::document::ClassifiedDoc;

/// Validates classifier output invariants.
///
/// Asserts that:
/// - There is exactly one classification and one match list per line
/// - Classification `i` carries `line_index == i`
/// - Every match refers to its own line and its ranges lie inside it
/// - `safe` is false exactly when a block pattern matched
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ClassifiedDoc<'_>) {
    let n = doc.lines.len();
    assert_eq!(
        doc.classifications.len(),
        n,
        "classification count does not match line count"
    );
    assert_eq!(doc.matches.len(), n, "match list count does not match line count");

    for (idx, c) in doc.classifications.iter().enumerate() {
        assert_eq!(c.line_index, idx, "classification out of order at {idx}");

        let line = doc.lines[idx];
        let has_block = doc.matches[idx]
            .iter()
            .any(|m| m.category == crate::patterns::Category::Block);
        assert_eq!(
            c.safe, !has_block,
            "safe flag disagrees with matches on line {idx}: {:?}",
            c.matched_names
        );

        for m in &doc.matches[idx] {
            assert_eq!(m.line, line, "match {} points at another line", m.pattern_name);
            for r in &m.ranges {
                assert!(
                    r.start <= r.end && r.end <= line.len(),
                    "range out of bounds: {:?} for {} (line len: {})",
                    r,
                    m.pattern_name,
                    line.len()
                );
            }
        }
    }
}
