pub mod async_input;
pub mod keyboard;

pub use async_input::input_stream;
pub use keyboard::{is_ctrl_c, is_press, KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::Event;

/// Terminal events the UI reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(k) => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}
