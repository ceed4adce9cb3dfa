use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::catalog::EndpointDemo;
use crate::envelope::RunResult;
use crate::ui::colors::{current, method_badge_style, Colors};
use crate::ui::text::{result_lines, LineKind};
use crate::ui::widgets::code_snippet::draw_code;

pub const LOADING_LABEL: &str = "Loading...";

/// Run button caption: `Loading...` while in flight, otherwise the verb.
pub fn button_label(demo: &EndpointDemo, loading: bool) -> String {
    if loading {
        LOADING_LABEL.to_string()
    } else {
        demo.run_label()
    }
}

fn style_for(kind: LineKind, theme: &Colors) -> Style {
    match kind {
        LineKind::Method => theme.title_style,
        LineKind::Description | LineKind::Footer | LineKind::NoData | LineKind::Rule => theme.muted_style,
        LineKind::Error => theme.error_style,
        LineKind::ColumnHeader => theme.table_header_style,
        LineKind::Row | LineKind::Json => theme.block_style,
    }
}

/// Styled lines for a stored result.
pub fn result_text(result: &RunResult) -> Text<'static> {
    let theme = current();
    let lines: Vec<Line<'static>> = result_lines(result)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.text, style_for(l.kind, &theme))))
        .collect();
    Text::from(lines)
}

/// Selected demo: request line, run button, description, result and code.
pub fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
    let theme = current();
    let (Some(demo), Some(runner)) = (app.selected_demo(), app.runner.as_ref()) else {
        return;
    };
    let state = runner.state(demo.name);
    let loading = state.map(|s| s.loading).unwrap_or(false);

    let border = if app.focus == Focus::Result { theme.focus_border_style } else { theme.block_style };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(demo.name)
        .border_style(border)
        .style(theme.block_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut request = vec![
        Span::styled(format!(" {} ", demo.method), method_badge_style(demo.method)),
        Span::raw(" "),
        Span::styled(demo.endpoint, theme.block_style),
    ];
    if let Some(body) = &demo.body {
        request.push(Span::styled(format!("  body: {}", body), theme.muted_style));
    }
    f.render_widget(Paragraph::new(Line::from(request)), rows[0]);

    let button_style = if loading { theme.button_loading_style } else { theme.button_style };
    let mut button = vec![Span::styled(format!("[ {} ]", button_label(demo, loading)), button_style)];
    if let Some(at) = state.and_then(|s| s.finished_at) {
        button.push(Span::styled(format!("  last run {}", at.format("%H:%M:%S")), theme.muted_style));
    }
    f.render_widget(Paragraph::new(Line::from(button)), rows[1]);

    f.render_widget(
        Paragraph::new(demo.description)
            .style(theme.muted_style)
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    let body = if app.settings.show_code {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[3])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(rows[3])
    };

    let text = state
        .and_then(|s| s.result.as_ref())
        .map(result_text)
        .unwrap_or_default();
    let result = Paragraph::new(text)
        .scroll(app.result_scroll)
        .block(Block::default().borders(Borders::TOP).title("Result").style(theme.block_style));
    f.render_widget(result, body[0]);

    if app.settings.show_code {
        draw_code(f, body[1], demo.code);
    }
}
