use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::api::HttpMethod;
use crate::ui::themes::Theme;

#[derive(Clone, Debug)]
pub struct Colors {
    pub block_style: Style,
    pub focus_border_style: Style,
    pub sidebar_selected_style: Style,
    pub sidebar_active_style: Style,
    pub list_selected_style: Style,
    pub header_style: Style,
    pub footer_style: Style,
    pub title_style: Style,
    pub muted_style: Style,
    pub table_header_style: Style,
    pub error_style: Style,
    pub code_style: Style,
    pub button_style: Style,
    pub button_loading_style: Style,
}

impl Colors {
    fn from_theme(theme: &Theme) -> Self {
        let base = theme.style_fg();
        Colors {
            block_style: base,
            focus_border_style: base.fg(theme.accent),
            sidebar_selected_style: Style::default().fg(theme.bg).bg(theme.accent),
            sidebar_active_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
            list_selected_style: Style::default().add_modifier(Modifier::REVERSED),
            header_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
            footer_style: base.fg(theme.muted),
            title_style: base.add_modifier(Modifier::BOLD),
            muted_style: base.fg(theme.muted),
            table_header_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
            error_style: base.fg(Color::Red).add_modifier(Modifier::BOLD),
            code_style: base.fg(Color::Yellow),
            button_style: Style::default().fg(theme.bg).bg(theme.accent),
            button_loading_style: Style::default().fg(theme.bg).bg(theme.muted),
        }
    }
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(Colors::from_theme(&Theme::dark())));

/// Derive concrete runtime styles from `theme` and store them.
pub fn set_from_theme(theme: &Theme) {
    let colors = Colors::from_theme(theme);
    match CURRENT.lock() {
        Ok(mut g) => *g = colors,
        Err(poisoned) => *poisoned.into_inner() = colors,
    }
}

pub fn current() -> Colors {
    match CURRENT.lock() {
        Ok(g) => g.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Badge colour per verb. Anything not GET, POST or PUT is drawn red.
pub fn method_color(method: &str) -> Color {
    match method.trim().to_ascii_uppercase().as_str() {
        "GET" => Color::Green,
        "POST" => Color::Blue,
        "PUT" => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn method_badge_style(method: HttpMethod) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(method_color(method.as_str()))
        .add_modifier(Modifier::BOLD)
}
