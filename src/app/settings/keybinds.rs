// Centralised keybind predicates for the application.
//
// Handlers ask `is_run(&code)` rather than matching raw `KeyCode`s, so the
// table below is the single place a binding changes.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::input::KeyCode;

static BINDINGS: Lazy<HashMap<&'static str, Vec<KeyCode>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("quit", vec![KeyCode::Char('q')]);
    m.insert("up", vec![KeyCode::Up, KeyCode::Char('k')]);
    m.insert("down", vec![KeyCode::Down, KeyCode::Char('j')]);
    m.insert("left", vec![KeyCode::Left, KeyCode::Char('h')]);
    m.insert("right", vec![KeyCode::Right, KeyCode::Char('l')]);
    m.insert("page_up", vec![KeyCode::PageUp]);
    m.insert("page_down", vec![KeyCode::PageDown]);
    m.insert("home", vec![KeyCode::Home, KeyCode::Char('g')]);
    m.insert("end", vec![KeyCode::End, KeyCode::Char('G')]);
    m.insert("enter", vec![KeyCode::Enter]);
    m.insert("tab", vec![KeyCode::Tab]);
    m.insert("back_tab", vec![KeyCode::BackTab]);
    m.insert("esc", vec![KeyCode::Esc]);
    m.insert("run", vec![KeyCode::Char('r')]);
    m.insert("run_all", vec![KeyCode::Char('A')]);
    m.insert("toggle_code", vec![KeyCode::Char('c')]);
    m.insert("toggle_theme", vec![KeyCode::Char('t')]);
    m.insert("help", vec![KeyCode::Char('?'), KeyCode::F(1)]);
    m
});

fn is_bound(action: &str, code: &KeyCode) -> bool {
    BINDINGS
        .get(action)
        .map(|keys| keys.contains(code))
        .unwrap_or(false)
}

/// Keys bound to `action`, for the help overlay.
pub fn keys_for(action: &str) -> &'static [KeyCode] {
    BINDINGS.get(action).map(Vec::as_slice).unwrap_or(&[])
}

pub fn is_quit(code: &KeyCode) -> bool {
    is_bound("quit", code)
}

pub fn is_up(code: &KeyCode) -> bool {
    is_bound("up", code)
}

pub fn is_down(code: &KeyCode) -> bool {
    is_bound("down", code)
}

pub fn is_left(code: &KeyCode) -> bool {
    is_bound("left", code)
}

pub fn is_right(code: &KeyCode) -> bool {
    is_bound("right", code)
}

pub fn is_page_up(code: &KeyCode) -> bool {
    is_bound("page_up", code)
}

pub fn is_page_down(code: &KeyCode) -> bool {
    is_bound("page_down", code)
}

pub fn is_home(code: &KeyCode) -> bool {
    is_bound("home", code)
}

pub fn is_end(code: &KeyCode) -> bool {
    is_bound("end", code)
}

pub fn is_enter(code: &KeyCode) -> bool {
    is_bound("enter", code)
}

pub fn is_tab(code: &KeyCode) -> bool {
    is_bound("tab", code)
}

pub fn is_back_tab(code: &KeyCode) -> bool {
    is_bound("back_tab", code)
}

pub fn is_esc(code: &KeyCode) -> bool {
    is_bound("esc", code)
}

pub fn is_run(code: &KeyCode) -> bool {
    is_bound("run", code)
}

pub fn is_run_all(code: &KeyCode) -> bool {
    is_bound("run_all", code)
}

pub fn is_toggle_code(code: &KeyCode) -> bool {
    is_bound("toggle_code", code)
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
    is_bound("toggle_theme", code)
}

pub fn is_help(code: &KeyCode) -> bool {
    is_bound("help", code)
}

/// Short label for a key, as shown in the footer and help overlay.
pub fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".into(),
        KeyCode::Down => "↓".into(),
        KeyCode::Left => "←".into(),
        KeyCode::Right => "→".into(),
        KeyCode::PageUp => "PgUp".into(),
        KeyCode::PageDown => "PgDn".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "S-Tab".into(),
        KeyCode::Esc => "Esc".into(),
        other => format!("{:?}", other),
    }
}
