use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::settings::keybinds::{key_label, keys_for};
use crate::ui::centered_rect;
use crate::ui::colors::current;

const ACTIONS: &[(&str, &str)] = &[
    ("tab", "next pane"),
    ("back_tab", "previous pane"),
    ("up", "move up / scroll result"),
    ("down", "move down / scroll result"),
    ("left", "scroll result left"),
    ("right", "scroll result right"),
    ("page_up", "page up"),
    ("page_down", "page down"),
    ("enter", "open page / run demo"),
    ("run", "run selected demo"),
    ("run_all", "run every demo on the page"),
    ("toggle_code", "show or hide code"),
    ("toggle_theme", "switch dark / light"),
    ("help", "this help"),
    ("quit", "quit"),
];

/// One `keys  description` line per bound action.
pub fn help_lines() -> Vec<String> {
    ACTIONS
        .iter()
        .map(|(action, what)| {
            let keys: Vec<String> = keys_for(action).iter().map(key_label).collect();
            format!("{:<12}{}", keys.join(" "), what)
        })
        .collect()
}

pub fn draw_help(f: &mut Frame, area: Rect) {
    let theme = current();
    let rect = centered_rect(60, 70, area);
    let lines: Vec<Line> = help_lines()
        .into_iter()
        .map(|l| Line::from(Span::styled(l, theme.block_style)))
        .collect();
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys (any key closes)")
                .border_style(theme.focus_border_style)
                .style(theme.block_style),
        ),
        rect,
    );
}
