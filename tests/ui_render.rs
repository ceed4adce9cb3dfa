mod common;

use std::sync::Arc;

use northwindDemo::app::settings::Settings;
use northwindDemo::app::App;
use northwindDemo::envelope::RunResult;
use northwindDemo::runner::Completion;
use northwindDemo::ui;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;
use serde_json::json;
use tokio::sync::mpsc;

fn app(route: &str) -> App {
    let (tx, _rx) = mpsc::unbounded_channel();
    App::new(Settings::default(), Arc::new(common::Scripted(vec![])), tx, route)
}

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut term = Terminal::new(TestBackend::new(120, 40)).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();
    term
}

fn screen(term: &Terminal<TestBackend>) -> String {
    let buf = term.backend().buffer();
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        s.push('\n');
    }
    s
}

fn settle(app: &mut App, name: &'static str, result: RunResult) {
    let mount = app.runner.as_ref().unwrap().mount();
    assert!(app.apply_completion(Completion { mount, name, result }));
}

#[test]
fn shell_shows_pages_and_highlights_current() {
    let a = app("/");
    let s = screen(&draw(&a));
    assert!(s.contains("EF Core Demos"));
    assert!(s.contains("▸ Basic Queries"));
    assert!(s.contains("  Raw SQL"));
    assert!(s.contains("Basic LINQ Queries"));
    assert!(s.contains("[ Run GET Request ]"));
}

#[test]
fn settled_table_is_drawn_with_row_count() {
    let mut a = app("/");
    settle(
        &mut a,
        "Where (LINQ Filter)",
        RunResult::Response(json!({
            "method": "Where()",
            "data": [{"productId": 1, "productName": "Chai", "unitPrice": 18}]
        })),
    );
    let s = screen(&draw(&a));
    assert!(s.contains("Method: Where()"));
    assert!(s.contains("productId  productName  unitPrice"));
    assert!(s.contains("1 row"));
    assert!(s.contains("last run"));
}

#[test]
fn error_banner_is_red() {
    let mut a = app("/");
    settle(&mut a, "Where (LINQ Filter)", RunResult::Error("connection refused".into()));
    let term = draw(&a);
    let s = screen(&term);
    let y = s.lines().position(|l| l.contains("Error: connection refused")).unwrap();
    let x = s.lines().nth(y).unwrap().find("Error:").unwrap();
    // Sidebar glyphs are multi-byte; columns are counted in chars.
    let col = s.lines().nth(y).unwrap()[..x].chars().count() as u16;
    let cell = term.backend().buffer().cell((col, y as u16)).unwrap();
    assert_eq!(cell.fg, Color::Red);
}

#[test]
fn method_badge_is_coloured_per_verb() {
    let a = app("/crud-operations");
    let term = draw(&a);
    let buf = term.backend().buffer();
    let s = screen(&term);
    for (verb, colour) in [("GET", Color::Green), ("POST", Color::Blue), ("PUT", Color::Yellow), ("DELETE", Color::Red)] {
        let (y, line) = s
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains(&format!(" {} ", verb)))
            .unwrap_or_else(|| panic!("{} badge not drawn", verb));
        let col = line[..line.find(&format!(" {} ", verb)).unwrap()].chars().count() as u16 + 1;
        assert_eq!(buf.cell((col, y as u16)).unwrap().bg, colour, "{}", verb);
    }
}

#[test]
fn code_snippet_follows_the_toggle() {
    let mut a = app("/");
    assert!(screen(&draw(&a)).contains("Where(p => p.UnitPrice > 20)"));
    a.toggle_code();
    assert!(!screen(&draw(&a)).contains("Where(p => p.UnitPrice > 20)"));
}

#[test]
fn unknown_route_leaves_content_empty() {
    let a = app("/nowhere");
    let s = screen(&draw(&a));
    assert!(s.contains("No page at /nowhere"));
    assert!(!s.contains("Run GET Request"));
}

#[tokio::test]
async fn loading_label_while_in_flight() {
    let (api, _gates) = common::Gated::new(1);
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut a = App::new(Settings::default(), Arc::new(api), tx, "/");
    a.run_selected();
    let s = screen(&draw(&a));
    assert!(s.contains("[ Loading... ]"));
    assert!(s.contains("1 running"));
}
