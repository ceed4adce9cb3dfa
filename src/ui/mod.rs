use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::settings::Settings;
use crate::app::{App, Mode};

pub mod colors;
pub mod text;
pub mod themes;
pub mod widgets;

pub use themes::{Theme, ThemeName};

/// Width of the page sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Install the colours described by `settings` (base theme plus palette).
pub fn apply_theme(settings: &Settings) {
    let mut theme = settings.theme.theme();
    if let Some(p) = &settings.palette {
        theme = theme.with_palette(p);
    }
    colors::set_from_theme(&theme);
}

pub fn ui(f: &mut Frame, app: &App) {
    // Header (1), body (min), footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    widgets::header::draw_header(f, chunks[0], app);
    widgets::sidebar::draw_sidebar(f, body[0], app);
    draw_content(f, body[1], app);
    widgets::footer::draw_footer(f, chunks[2], app);

    if app.mode == Mode::Help {
        widgets::help::draw_help(f, f.area());
    }
}

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    let theme = colors::current();
    let Some(catalog) = app.catalog() else {
        let msg = Paragraph::new(format!("No page at {}", app.route))
            .style(theme.muted_style)
            .block(Block::default().borders(Borders::ALL).style(theme.block_style));
        f.render_widget(msg, area);
        return;
    };

    // Keep the list to at most 40% of the height, less when the page is short.
    let list_rows = (catalog.demos.len() as u16).saturating_add(2);
    let list_max = area.height.saturating_mul(2) / 5;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(list_rows.min(list_max.max(3))),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(catalog.subtitle)
        .style(theme.muted_style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(catalog.title)
                .title_style(theme.title_style)
                .style(theme.block_style),
        );
    f.render_widget(title, chunks[0]);

    widgets::demo_list::draw_demo_list(f, chunks[1], app);
    widgets::result_view::draw_detail(f, chunks[2], app);
}

/// Rectangle of `percent_x` by `percent_y` centred in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
