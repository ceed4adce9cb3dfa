use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::current;

pub const HINTS: &str = "Tab:focus  ↑/↓:move  Enter:open/run  r:run  A:run all  c:code  t:theme  ?:help  q:quit";

pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = current();
    let in_flight = app.runner.as_ref().map(|r| r.in_flight()).unwrap_or(0);
    let text = match (&app.status, in_flight) {
        (Some(msg), _) => msg.clone(),
        (None, 0) => format!("[{}]  {}", app.focus, HINTS),
        (None, n) => format!("[{}]  {} running  {}", app.focus, n, HINTS),
    };
    f.render_widget(Paragraph::new(text).style(theme.footer_style), area);
}
