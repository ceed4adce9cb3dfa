use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::catalog;
use crate::ui::colors::current;

/// Page list. The mounted page is marked, the cursor is highlighted.
pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = current();
    let items: Vec<ListItem> = catalog::nav_items()
        .map(|n| {
            let active = n.path == app.route;
            let marker = if active { "▸ " } else { "  " };
            let label_style = if active { theme.sidebar_active_style } else { theme.block_style };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{}{}", marker, n.label), label_style)),
                Line::from(Span::styled(format!("  {}", n.desc), theme.muted_style)),
            ])
        })
        .collect();

    let border = if app.focus == Focus::Sidebar { theme.focus_border_style } else { theme.block_style };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pages")
                .border_style(border)
                .style(theme.block_style),
        )
        .highlight_style(theme.sidebar_selected_style);

    let mut state = ListState::default()
        .with_selected(Some(app.nav.selected))
        .with_offset(app.nav.offset);
    f.render_stateful_widget(list, area, &mut state);
}
