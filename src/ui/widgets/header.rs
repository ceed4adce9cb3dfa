use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::current;

pub const APP_TITLE: &str = "EF Core Demos";

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = current();
    let page = app.catalog().map(|c| c.title).unwrap_or("-");
    let line = Line::from(vec![
        Span::styled(format!(" {} ", APP_TITLE), theme.header_style),
        Span::styled(format!("  {}  ", page), theme.title_style),
        Span::styled(app.settings.base_url.clone(), theme.muted_style),
    ]);
    f.render_widget(Paragraph::new(line).style(theme.block_style), area);
}
