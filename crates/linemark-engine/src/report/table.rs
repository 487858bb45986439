use super::normalize::Report;

const PREVIEW_CHARS: usize = 60;

/// Renders one row per line:
/// `index | line_type | safe/unsafe | names | "text"`.
///
/// Names are comma separated, `-` when nothing matched. Rows carrying ranges
/// get a trailing `| name[start..end] ...` column.
pub fn render_table(report: &Report) -> String {
    report
        .lines
        .iter()
        .map(|line| {
            let safety = if line.safe { "safe" } else { "unsafe" };
            let names = if line.matched_names.is_empty() {
                "-".to_string()
            } else {
                line.matched_names.join(",")
            };
            let mut row = format!(
                "{} | {} | {} | {} | {:?}",
                line.line_index,
                line.line_type,
                safety,
                names,
                preview(&line.text)
            );

            if let Some(ranges) = &line.ranges {
                let cells: Vec<String> = ranges
                    .iter()
                    .flat_map(|(name, spans)| {
                        spans
                            .iter()
                            .map(move |(start, end)| format!("{name}[{start}..{end}]"))
                    })
                    .collect();
                if !cells.is_empty() {
                    row.push_str(" | ");
                    row.push_str(&cells.join(" "));
                }
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Lookahead;
    use crate::document::{classify_document, split_lines};
    use crate::patterns::PatternRegistry;
    use crate::report::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_rows() {
        let registry = PatternRegistry::builtin().unwrap();
        let lines = split_lines("# Title\n\nSome text.");
        let doc = classify_document(&registry, &lines, Lookahead::EveryLine);

        assert_eq!(
            render_table(&normalize(&doc, false)),
            "0 | paragraph_end | unsafe | heading1 | \"# Title\"\n\
             1 | block_start_end | unsafe | linebreak | \"\"\n\
             2 | paragraph_start | safe | - | \"Some text.\""
        );
    }

    #[test]
    fn renders_ranges_column() {
        let registry = PatternRegistry::builtin().unwrap();
        let lines = ["- *a*"];
        let doc = classify_document(&registry, &lines, Lookahead::EveryLine);

        assert_eq!(
            render_table(&normalize(&doc, true)),
            "0 | block_start_end | unsafe | em,ul | \"- *a*\" | em[2..5] ul[0..2]"
        );
    }

    #[test]
    fn empty_report_renders_empty_string() {
        assert_eq!(render_table(&Report { lines: vec![] }), "");
    }

    #[test]
    fn long_lines_are_truncated() {
        let long = "x".repeat(80);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }
}
