use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::colors::current;

/// Backend source of the demo. Display only, never wrapped.
pub fn draw_code(f: &mut Frame, area: Rect, code: &str) {
    let theme = current();
    let p = Paragraph::new(code.to_string())
        .style(theme.code_style)
        .block(Block::default().borders(Borders::TOP | Borders::LEFT).title("Code").style(theme.block_style));
    f.render_widget(p, area);
}
