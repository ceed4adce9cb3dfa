use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::catalog::EndpointDemo;
use crate::runner::demo_runner::RunPhase;
use crate::ui::colors::{current, method_badge_style};

pub fn phase_glyph(phase: RunPhase) -> &'static str {
    match phase {
        RunPhase::Idle => " ",
        RunPhase::Running => "…",
        RunPhase::Succeeded => "✓",
        RunPhase::Failed => "✗",
    }
}

/// `[GET ] name  ✓` style row.
pub fn demo_line(demo: &EndpointDemo, phase: RunPhase) -> Line<'static> {
    let theme = current();
    let glyph_style = match phase {
        RunPhase::Failed => theme.error_style,
        _ => theme.muted_style,
    };
    Line::from(vec![
        Span::styled(format!(" {:<6} ", demo.method.as_str()), method_badge_style(demo.method)),
        Span::raw(" "),
        Span::styled(demo.name, theme.block_style),
        Span::raw(" "),
        Span::styled(phase_glyph(phase), glyph_style),
    ])
}

pub fn draw_demo_list(f: &mut Frame, area: Rect, app: &App) {
    let theme = current();
    let Some(runner) = app.runner.as_ref() else {
        return;
    };
    let items: Vec<ListItem> = runner
        .catalog()
        .demos
        .iter()
        .map(|d| ListItem::new(demo_line(d, runner.phase(d.name))))
        .collect();

    let border = if app.focus == Focus::Demos { theme.focus_border_style } else { theme.block_style };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Demos")
                .border_style(border)
                .style(theme.block_style),
        )
        .highlight_style(theme.list_selected_style);

    let mut state = ListState::default()
        .with_selected(Some(app.demos.selected))
        .with_offset(app.demos.offset);
    f.render_stateful_widget(list, area, &mut state);
}
