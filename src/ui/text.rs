//! Plain-text rendering of a run result.
//!
//! Produces tagged lines so the terminal UI can style them and the headless
//! CLI can print them as-is.

use crate::envelope::{self, Payload, RunResult, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Method,
    Description,
    Error,
    ColumnHeader,
    Rule,
    Row,
    Footer,
    NoData,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub kind: LineKind,
    pub text: String,
}

impl ResultLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        let text: String = text.into();
        ResultLine {
            kind,
            text: text.trim_end().to_string(),
        }
    }
}

pub const NO_DATA: &str = "No data returned.";
const COLUMN_GAP: &str = "  ";

/// Lines for one stored result, top to bottom.
pub fn result_lines(result: &RunResult) -> Vec<ResultLine> {
    let mut out = Vec::new();
    match envelope::normalize(result) {
        Payload::Empty => {}
        Payload::Error(msg) => out.push(ResultLine::new(LineKind::Error, format!("Error: {}", msg))),
        Payload::Array { header, rows } => {
            push_header(&mut out, &header);
            out.extend(table_lines(&TableView::from_rows(rows)));
        }
        Payload::Scalar { header, response } => {
            push_header(&mut out, &header);
            out.extend(
                envelope::pretty_json(response)
                    .lines()
                    .map(|l| ResultLine::new(LineKind::Json, l)),
            );
        }
    }
    out
}

fn push_header(out: &mut Vec<ResultLine>, header: &envelope::EnvelopeHeader) {
    if let Some(m) = &header.method {
        out.push(ResultLine::new(LineKind::Method, format!("Method: {}", m)));
    }
    if let Some(d) = &header.description {
        out.push(ResultLine::new(LineKind::Description, d.as_str()));
    }
}

/// Column-aligned table with a dashed rule under the header and a row count.
pub fn table_lines(table: &TableView) -> Vec<ResultLine> {
    if table.is_empty() {
        return vec![ResultLine::new(LineKind::NoData, NO_DATA)];
    }
    let widths = table.column_widths();
    let mut out = Vec::with_capacity(table.rows.len() + 3);

    out.push(ResultLine::new(LineKind::ColumnHeader, join_padded(&table.columns, &widths)));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(ResultLine::new(LineKind::Rule, rule.join(COLUMN_GAP)));
    for row in &table.rows {
        out.push(ResultLine::new(LineKind::Row, join_padded(row, &widths)));
    }
    out.push(ResultLine::new(
        LineKind::Footer,
        envelope::row_count_label(table.rows.len()),
    ));
    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, w)| {
            let pad = w.saturating_sub(c.chars().count());
            format!("{}{}", c, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

/// Result rendered to a single string, one line per entry.
pub fn render_plain(result: &RunResult) -> String {
    result_lines(result)
        .into_iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn where_scenario_renders_one_row_table() {
        let r = RunResult::Response(json!({
            "method": "Where()",
            "data": [{"productId": 1, "productName": "Chai", "unitPrice": 18}]
        }));
        insta::assert_snapshot!(render_plain(&r), @r"
        Method: Where()
        productId  productName  unitPrice
        ---------  -----------  ---------
        1          Chai         18
        1 row
        ");
    }

    #[test]
    fn scalar_renders_pretty_json() {
        let r = RunResult::Response(json!({"method": "AnyAsync()", "data": false, "hasExpensive": true}));
        insta::assert_snapshot!(render_plain(&r), @r#"
        Method: AnyAsync()
        {
          "method": "AnyAsync()",
          "data": false,
          "hasExpensive": true
        }
        "#);
    }

    #[test]
    fn error_renders_banner() {
        let r = RunResult::Error("Request failed with status code 500".into());
        assert_eq!(render_plain(&r), "Error: Request failed with status code 500");
        assert_eq!(result_lines(&r)[0].kind, LineKind::Error);
    }

    #[test]
    fn primitive_response_renders_nothing() {
        assert_eq!(render_plain(&RunResult::Response(Value::Null)), "");
        assert!(result_lines(&RunResult::Response(json!("ok"))).is_empty());
        assert!(result_lines(&RunResult::Response(json!(0))).is_empty());
    }

    #[test]
    fn empty_array_says_no_data() {
        let r = RunResult::Response(json!({"Description": "nothing matched", "Data": []}));
        let lines = result_lines(&r);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Description);
        assert_eq!(lines[1].text, NO_DATA);
    }

    #[test]
    fn null_and_bool_cells() {
        let r = RunResult::Response(json!({"data": [
            {"name": "Chai", "discontinued": false, "supplier": null},
            {"name": "Chang", "discontinued": true, "supplier": {"id": 1}}
        ]}));
        let lines = result_lines(&r);
        assert_eq!(lines[2].text, "Chai   false");
        assert_eq!(lines[3].text, r#"Chang  true          {"id":1}"#);
        assert_eq!(lines[4].text, "2 rows");
    }
}
