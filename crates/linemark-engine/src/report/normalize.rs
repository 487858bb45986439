use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::LineType;
use crate::document::ClassifiedDoc;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub lines: Vec<LineReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub line_index: usize,
    pub text: String,
    pub matched_names: Vec<String>,
    pub safe: bool,
    pub line_type: LineType,
    /// Byte ranges per matched pattern, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<BTreeMap<String, Vec<(usize, usize)>>>,
}

pub fn normalize(doc: &ClassifiedDoc<'_>, with_ranges: bool) -> Report {
    let lines = doc
        .classifications
        .iter()
        .zip(&doc.lines)
        .zip(&doc.matches)
        .map(|((c, text), matches)| {
            let ranges = with_ranges.then(|| {
                matches
                    .iter()
                    .map(|m| {
                        let spans: Vec<(usize, usize)> =
                            m.ranges.iter().map(|&s| s.into()).collect();
                        (m.pattern_name.clone(), spans)
                    })
                    .collect::<BTreeMap<_, _>>()
            });

            LineReport {
                line_index: c.line_index,
                text: (*text).to_string(),
                matched_names: c.matched_names.clone(),
                safe: c.safe,
                line_type: c.line_type,
                ranges,
            }
        })
        .collect();

    Report { lines }
}
