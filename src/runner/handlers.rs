//! Key dispatch for the terminal UI.

use crate::app::settings::keybinds;
use crate::app::{App, Focus, Mode};
use crate::input::{is_ctrl_c, KeyCode, KeyEvent};

/// Top-level key handler. Returns `true` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent, page_size: usize) -> anyhow::Result<bool> {
    if is_ctrl_c(&key) {
        return Ok(true);
    }
    app.status = None;
    match app.mode {
        Mode::Help => {
            app.mode = Mode::Normal;
            Ok(false)
        }
        Mode::Normal => handle_normal(app, key.code, page_size),
    }
}

fn handle_normal(app: &mut App, code: KeyCode, page_size: usize) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_help(&code) {
        app.mode = Mode::Help;
    } else if keybinds::is_tab(&code) {
        app.cycle_focus(true);
    } else if keybinds::is_back_tab(&code) {
        app.cycle_focus(false);
    } else if keybinds::is_esc(&code) {
        app.focus = Focus::Demos;
    } else if keybinds::is_down(&code) {
        app.next(page_size);
    } else if keybinds::is_up(&code) {
        app.previous(page_size);
    } else if keybinds::is_page_down(&code) {
        app.page_down(page_size);
    } else if keybinds::is_page_up(&code) {
        app.page_up(page_size);
    } else if keybinds::is_home(&code) {
        app.home(page_size);
    } else if keybinds::is_end(&code) {
        app.end(page_size);
    } else if keybinds::is_left(&code) {
        handle_horizontal(app, -4);
    } else if keybinds::is_right(&code) {
        handle_horizontal(app, 4);
    } else if keybinds::is_enter(&code) {
        match app.focus {
            Focus::Sidebar => app.open_selected_page(),
            Focus::Demos | Focus::Result => app.run_selected(),
        }
    } else if keybinds::is_run(&code) {
        app.run_selected();
    } else if keybinds::is_run_all(&code) {
        app.run_all();
    } else if keybinds::is_toggle_code(&code) {
        app.toggle_code();
    } else if keybinds::is_toggle_theme(&code) {
        app.toggle_theme();
    }
    Ok(false)
}

// Left/right scroll the result sideways; in the sidebar, right opens the page.
fn handle_horizontal(app: &mut App, delta: i32) {
    match app.focus {
        Focus::Result => app.scroll_result_x(delta),
        Focus::Sidebar if delta > 0 => app.open_selected_page(),
        Focus::Demos if delta < 0 => app.focus = Focus::Sidebar,
        _ => {}
    }
}
