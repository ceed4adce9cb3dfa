mod common;

use std::sync::Arc;

use northwindDemo::app::settings::Settings;
use northwindDemo::app::{App, Focus, Mode};
use northwindDemo::input::{KeyCode, KeyEvent, KeyModifiers};
use northwindDemo::runner::handlers::handle_key;
use serde_json::json;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, key(code), 10).unwrap()
}

fn offline_app(route: &str) -> App {
    let (tx, _rx) = mpsc::unbounded_channel();
    App::new(Settings::default(), Arc::new(common::Scripted(vec![])), tx, route)
}

#[tokio::test]
async fn remount_drops_state_and_stale_completions() {
    let (api, mut gates) = common::Gated::new(1);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(Settings::default(), Arc::new(api), tx, "/tracking");

    app.run_selected();
    let name = app.selected_demo().unwrap().name;
    assert!(app.runner.as_ref().unwrap().is_loading(name));

    app.mount("/pagination");
    app.mount("/tracking");
    assert!(app.runner.as_ref().unwrap().state(name).is_none());

    gates.remove(0).send(Ok(json!({"data": []}))).unwrap();
    let late = rx.recv().await.unwrap();
    assert!(!app.apply_completion(late));
    assert!(app.runner.as_ref().unwrap().state(name).is_none());
}

#[tokio::test]
async fn enter_runs_the_selected_demo() {
    let (api, _gates) = common::Gated::new(1);
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = App::new(Settings::default(), Arc::new(api), tx, "/");

    press(&mut app, KeyCode::Down);
    let demo = app.selected_demo().unwrap();
    assert_eq!(demo.name, "Find (Primary Key)");
    press(&mut app, KeyCode::Enter);
    assert!(app.runner.as_ref().unwrap().is_loading(demo.name));
    assert_eq!(app.runner.as_ref().unwrap().in_flight(), 1);
}

#[test]
fn sidebar_enter_mounts_the_page_under_the_cursor() {
    let mut app = offline_app("/");
    assert_eq!(app.focus, Focus::Demos);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Sidebar);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    // Moving the cursor alone does not navigate.
    assert_eq!(app.route, "/basic-queries");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route, "/related-data");
    assert_eq!(app.focus, Focus::Demos);
    assert_eq!(app.demos.selected, 0);
}

#[test]
fn demo_selection_clamps_and_resets_scroll() {
    let mut app = offline_app("/stored-procedures");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Result);
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.result_scroll.0, 10);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Demos);
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.demos.selected, 1);
    assert_eq!(app.result_scroll, (0, 0));
}

#[test]
fn help_overlay_closes_on_any_key() {
    let mut app = offline_app("/");
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.mode, Mode::Help);
    // 'q' closes help rather than quitting.
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.mode, Mode::Normal);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut app = offline_app("/");
    app.mode = Mode::Help;
    let quit = handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 10).unwrap();
    assert!(quit);
}

#[test]
fn code_toggle_key() {
    let mut app = offline_app("/");
    press(&mut app, KeyCode::Char('c'));
    assert!(!app.settings.show_code);
    press(&mut app, KeyCode::Char('c'));
    assert!(app.settings.show_code);
}
