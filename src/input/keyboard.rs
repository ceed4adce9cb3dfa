// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Only presses drive actions; release and repeat events (reported on some
/// platforms) are ignored.
pub fn is_press(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Press
}

/// Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
