//! Static endpoint catalogs, one per sidebar page.
//!
//! Everything here is plain data. Catalogs are built once and handed out as
//! `&'static` so nothing downstream can mutate an entry.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::api::HttpMethod;

pub mod pages;

/// A single named, pre-described API call.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDemo {
    /// Display label, unique within its catalog. Doubles as the state key.
    pub name: &'static str,
    /// Request path including any literal query string.
    pub endpoint: &'static str,
    pub method: HttpMethod,
    pub description: &'static str,
    /// Backend source shown next to the demo. Never executed.
    pub code: &'static str,
    /// Request payload; only POST/PUT demos that need one carry it.
    pub body: Option<Value>,
}

impl EndpointDemo {
    pub fn new(
        name: &'static str,
        method: HttpMethod,
        endpoint: &'static str,
        description: &'static str,
        code: &'static str,
    ) -> Self {
        EndpointDemo {
            name,
            endpoint,
            method,
            description,
            code,
            body: None,
        }
    }

    pub fn get(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        code: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Get, endpoint, description, code)
    }

    pub fn post(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        code: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Post, endpoint, description, code)
    }

    pub fn put(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        code: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Put, endpoint, description, code)
    }

    pub fn delete(
        name: &'static str,
        endpoint: &'static str,
        description: &'static str,
        code: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Delete, endpoint, description, code)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Label of the run button for an idle demo.
    pub fn run_label(&self) -> String {
        format!("Run {} Request", self.method)
    }
}

/// Sidebar entry: route path, label and a short hint of what the page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

/// Ordered demos for one topic page.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub nav: NavItem,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub demos: Vec<EndpointDemo>,
}

impl Catalog {
    pub fn path(&self) -> &'static str {
        self.nav.path
    }

    pub fn demo(&self, name: &str) -> Option<&EndpointDemo> {
        self.demos.iter().find(|d| d.name == name)
    }

    /// Case-insensitive lookup used by the headless CLI, where typing the
    /// exact label is tedious.
    pub fn find_demo(&self, name: &str) -> Option<&EndpointDemo> {
        self.demo(name)
            .or_else(|| self.demos.iter().find(|d| d.name.eq_ignore_ascii_case(name)))
    }
}

/// Route the shell lands on for `/`.
pub const DEFAULT_PATH: &str = "/basic-queries";

static PAGES: Lazy<Vec<Catalog>> = Lazy::new(|| {
    vec![
        pages::basic_queries::catalog(),
        pages::raw_sql::catalog(),
        pages::related_data::catalog(),
        pages::tracking::catalog(),
        pages::crud_operations::catalog(),
        pages::bulk_operations::catalog(),
        pages::transactions::catalog(),
        pages::compiled_queries::catalog(),
        pages::global_filters::catalog(),
        pages::change_tracker::catalog(),
        pages::stored_procedures::catalog(),
        pages::pagination::catalog(),
    ]
});

/// All catalogs in sidebar order.
pub fn pages() -> &'static [Catalog] {
    PAGES.as_slice()
}

/// The fixed navigation list.
pub fn nav_items() -> impl Iterator<Item = &'static NavItem> {
    pages().iter().map(|c| &c.nav)
}

/// Normalize a route: empty and `/` go to the default page.
pub fn resolve_route(path: &str) -> &str {
    match path.trim() {
        "" | "/" => DEFAULT_PATH,
        p => p,
    }
}

/// Catalog mounted at `path`, after redirecting the root.
pub fn by_path(path: &str) -> Option<&'static Catalog> {
    let path = resolve_route(path);
    pages().iter().find(|c| c.nav.path == path)
}

/// Index of the page at `path` in sidebar order.
pub fn index_of(path: &str) -> Option<usize> {
    let path = resolve_route(path);
    pages().iter().position(|c| c.nav.path == path)
}

/// Resolve a user-typed page reference: a route path, the path without its
/// leading slash, or the sidebar label (case-insensitive).
pub fn lookup(page: &str) -> Option<&'static Catalog> {
    let page = page.trim();
    by_path(page)
        .or_else(|| by_path(&format!("/{}", page)))
        .or_else(|| {
            pages()
                .iter()
                .find(|c| c.nav.label.eq_ignore_ascii_case(page))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn twelve_pages_in_sidebar_order() {
        let paths: Vec<&str> = nav_items().map(|n| n.path).collect();
        assert_eq!(
            paths,
            vec![
                "/basic-queries",
                "/raw-sql",
                "/related-data",
                "/tracking",
                "/crud-operations",
                "/bulk-operations",
                "/transactions",
                "/compiled-queries",
                "/global-filters",
                "/change-tracker",
                "/stored-procedures",
                "/pagination",
            ]
        );
    }

    #[test]
    fn demo_names_unique_within_each_catalog() {
        for c in pages() {
            let mut seen = HashSet::new();
            for d in &c.demos {
                assert!(seen.insert(d.name), "duplicate demo `{}` in {}", d.name, c.path());
            }
            assert!(!c.demos.is_empty(), "{} has no demos", c.path());
        }
    }

    #[test]
    fn bodies_only_on_post_or_put() {
        for c in pages() {
            for d in &c.demos {
                if d.body.is_some() {
                    assert!(d.method.carries_body(), "{} has a body on {}", d.name, d.method);
                }
            }
        }
    }

    #[test]
    fn endpoints_are_absolute_api_paths() {
        for c in pages() {
            for d in &c.demos {
                assert!(d.endpoint.starts_with("/api/"), "{}", d.endpoint);
            }
        }
    }

    #[test]
    fn root_redirects_to_basic_queries() {
        assert_eq!(by_path("/").map(|c| c.path()), Some("/basic-queries"));
        assert_eq!(by_path("").map(|c| c.path()), Some("/basic-queries"));
        assert_eq!(index_of("/"), Some(0));
        assert!(by_path("/nope").is_none());
    }

    #[test]
    fn lookup_accepts_label_and_bare_path() {
        assert_eq!(lookup("raw-sql").map(|c| c.path()), Some("/raw-sql"));
        assert_eq!(lookup("Change Tracker").map(|c| c.path()), Some("/change-tracker"));
        assert_eq!(lookup("/pagination").map(|c| c.path()), Some("/pagination"));
    }

    #[test]
    fn find_demo_ignores_case() {
        let c = by_path("/basic-queries").unwrap();
        assert!(c.find_demo("count").is_some());
        assert!(c.demo("count").is_none());
    }

    #[test]
    fn run_label_names_the_verb() {
        let c = by_path("/crud-operations").unwrap();
        let remove = c.demo("Remove").unwrap();
        assert_eq!(remove.run_label(), "Run DELETE Request");
    }
}
