//! Non-interactive commands: list pages, list demos, run demos and print.

use std::io::{self, Write};

use futures::future::join_all;
use serde_json::json;

use crate::api::DemoApi;
use crate::catalog::{self, Catalog, EndpointDemo};
use crate::envelope::{self, Payload, RunResult};
use crate::errors::AppError;
use crate::runner::demo_runner::run_once;
use crate::ui::text::render_plain;

const WRAP_WIDTH: usize = 88;
const DESCRIPTION_INDENT: usize = 9;

pub fn print_pages(out: &mut impl Write) -> io::Result<()> {
    for n in catalog::nav_items() {
        writeln!(out, "{:<20} {:<18} {}", n.path, n.label, n.desc)?;
    }
    Ok(())
}

pub fn print_demos(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}: {}", catalog.title, catalog.subtitle)?;
    let indent = " ".repeat(DESCRIPTION_INDENT);
    let opts = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(&indent)
        .subsequent_indent(&indent);
    for d in &catalog.demos {
        writeln!(out, "  {:<6} {:<42} {}", d.method.as_str(), d.name, d.endpoint)?;
        writeln!(out, "{}", textwrap::fill(d.description, &opts))?;
    }
    Ok(())
}

/// Demos named on the command line, or the whole page when none are.
pub fn select_demos(
    catalog: &'static Catalog,
    names: &[String],
) -> Result<Vec<&'static EndpointDemo>, AppError> {
    if names.is_empty() {
        return Ok(catalog.demos.iter().collect());
    }
    names
        .iter()
        .map(|n| {
            catalog.find_demo(n).ok_or_else(|| AppError::UnknownDemo {
                page: catalog.path().to_string(),
                name: n.clone(),
            })
        })
        .collect()
}

/// Run every demo concurrently; results come back in input order.
pub async fn run_demos(
    api: &dyn DemoApi,
    demos: &[&'static EndpointDemo],
) -> Vec<(&'static EndpointDemo, RunResult)> {
    join_all(demos.iter().map(|d| async move { (*d, run_once(api, d).await) })).await
}

/// Whether a result would show the error banner.
pub fn is_failure(result: &RunResult) -> bool {
    matches!(envelope::normalize(result), Payload::Error(_))
}

/// Print the results and return how many failed.
pub fn write_report(
    out: &mut impl Write,
    results: &[(&'static EndpointDemo, RunResult)],
    as_json: bool,
) -> io::Result<usize> {
    let failures = results.iter().filter(|(_, r)| is_failure(r)).count();
    if as_json {
        let doc: Vec<_> = results
            .iter()
            .map(|(d, r)| {
                json!({
                    "name": d.name,
                    "method": d.method.as_str(),
                    "endpoint": d.endpoint,
                    "result": r.to_json(),
                })
            })
            .collect();
        writeln!(out, "{}", envelope::pretty_json(&serde_json::Value::Array(doc)))?;
        return Ok(failures);
    }
    for (d, r) in results {
        writeln!(out, "== {}  {} {}", d.name, d.method, d.endpoint)?;
        writeln!(out, "{}", render_plain(r))?;
        writeln!(out)?;
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_lists_every_route() {
        let mut buf = Vec::new();
        print_pages(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s.lines().count(), 12);
        assert!(s.lines().next().unwrap().starts_with("/basic-queries"));
    }

    #[test]
    fn demos_are_listed_with_wrapped_descriptions() {
        let mut buf = Vec::new();
        print_demos(&mut buf, catalog::by_path("/stored-procedures").unwrap()).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("Stored Procedures: "));
        assert!(s.contains("  GET    Ten Most Expensive Products"));
        assert!(s
            .lines()
            .skip(1)
            .filter(|l| !l.starts_with("  GET"))
            .all(|l| l.starts_with("         ") && l.chars().count() <= WRAP_WIDTH));
        assert!(s.contains("         Calls the Northwind"));
    }

    #[test]
    fn empty_selection_means_whole_page() {
        let c = catalog::by_path("/tracking").unwrap();
        assert_eq!(select_demos(c, &[]).unwrap().len(), c.demos.len());
    }

    #[test]
    fn unknown_demo_is_reported() {
        let c = catalog::by_path("/tracking").unwrap();
        let err = select_demos(c, &["Bogus".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Bogus"));
    }

    #[test]
    fn error_field_counts_as_failure() {
        assert!(is_failure(&RunResult::Response(json!({"error": "boom"}))));
        assert!(!is_failure(&RunResult::Response(json!({"data": []}))));
    }
}
