//! Response envelope normalization.
//!
//! The backend answers with a loosely shaped object: `method`, `description`
//! and `data` are all optional and may arrive with either a lower-case or an
//! upper-case first letter. Everything here resolves that once into a
//! [`Payload`] so the renderers never look at raw field names.

use serde_json::{json, Value};

use crate::api::RequestError;

/// Last outcome of a run, as stored by the demo runner.
#[derive(Debug, Clone, PartialEq)]
pub enum RunResult {
    /// The parsed response body, untouched.
    Response(Value),
    /// The `{error: message}` wrapper for a failed request.
    Error(String),
}

impl RunResult {
    pub fn is_error(&self) -> bool {
        matches!(self, RunResult::Error(_))
    }

    /// JSON form: the raw response, or `{"error": message}`.
    pub fn to_json(&self) -> Value {
        match self {
            RunResult::Response(v) => v.clone(),
            RunResult::Error(msg) => json!({ "error": msg }),
        }
    }
}

impl From<Result<Value, RequestError>> for RunResult {
    fn from(r: Result<Value, RequestError>) -> Self {
        match r {
            Ok(v) => RunResult::Response(v),
            Err(e) => RunResult::Error(e.message()),
        }
    }
}

/// `method` / `description` lines shown above a result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub method: Option<String>,
    pub description: Option<String>,
}

/// A run result after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    /// `data` (or `Data`) is an array: render as a table.
    Array {
        header: EnvelopeHeader,
        rows: &'a [Value],
    },
    /// Anything else: render the whole response as pretty JSON.
    Scalar {
        header: EnvelopeHeader,
        response: &'a Value,
    },
    /// Error banner text.
    Error(String),
    /// A falsy or primitive response: nothing to draw.
    Empty,
}

/// Resolve a stored result into the shape the renderers draw.
pub fn normalize(result: &RunResult) -> Payload<'_> {
    let response = match result {
        RunResult::Error(msg) => return Payload::Error(msg.clone()),
        RunResult::Response(v) => v,
    };
    if !(response.is_object() || response.is_array()) {
        return Payload::Empty;
    }

    // A 2xx body can still carry an `error` field; it wins over everything.
    if let Some(err) = response.get("error").filter(|v| is_truthy(v)) {
        return Payload::Error(format_value(err));
    }

    let header = EnvelopeHeader {
        method: field(response, "method").map(format_value),
        description: field(response, "description").map(format_value),
    };

    match field(response, "data") {
        Some(Value::Array(rows)) => Payload::Array { header, rows },
        _ => Payload::Scalar { header, response },
    }
}

/// First truthy value among `name` and its capitalized spelling.
pub fn field<'a>(response: &'a Value, name: &str) -> Option<&'a Value> {
    let obj = response.as_object()?;
    obj.get(name)
        .filter(|v| is_truthy(v))
        .or_else(|| obj.get(&capitalize(name)).filter(|v| is_truthy(v)))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// JavaScript truthiness, which decides whether a lower-case field is
/// "present" before its upper-case twin is consulted.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Format a single table cell.
///
/// `null` becomes an empty string, booleans `true`/`false`, objects and
/// arrays compact JSON, and everything else its plain string form.
pub fn format_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}

// Whole floats print without a fraction ("18", not "18.0") so prices that
// round-trip through a decimal column read the same as integer ones.
fn format_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
        }
    }
    n.to_string()
}

/// Two-space indented JSON of the whole response.
pub fn pretty_json(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Column set and formatted cells of an array payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column header used when rows are bare values rather than objects.
pub const VALUE_COLUMN: &str = "value";

impl TableView {
    /// Columns come from the first row only, in its key order. Later rows
    /// with extra keys do not add columns; missing keys render empty.
    pub fn from_rows(rows: &[Value]) -> Self {
        let columns: Vec<String> = match rows.first() {
            Some(Value::Object(first)) => first.keys().cloned().collect(),
            Some(_) => vec![VALUE_COLUMN.to_string()],
            None => Vec::new(),
        };
        let keyed = matches!(rows.first(), Some(Value::Object(_)));

        let rows = rows
            .iter()
            .map(|row| {
                if keyed {
                    columns
                        .iter()
                        .map(|c| row.get(c).map(format_value).unwrap_or_default())
                        .collect()
                } else {
                    vec![format_value(row)]
                }
            })
            .collect();

        TableView { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest cell per column, header included, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(c.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// "1 row" / "N rows".
pub fn row_count_label(n: usize) -> String {
    if n == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", n)
    }
}
