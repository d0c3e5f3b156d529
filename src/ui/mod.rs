//! Terminal UI components
//!
//! Built with ratatui. One render entry point dispatches on the current
//! page; a fixed header carries the navigation tabs and a status bar shows
//! key hints plus the playback state.

pub mod archive;
pub mod home;
pub mod player;
pub mod theme;
pub mod title;

pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, Page};
use crate::router::Route;

/// Render the whole frame for the current app state
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header with nav tabs
            Constraint::Min(1),    // page content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app.router.current());

    match &mut app.page {
        Page::Home(state) => home::render(frame, chunks[1], state),
        Page::Archive(state) => archive::render(frame, chunks[1], state),
        Page::Title(state) => title::render(frame, chunks[1], state),
        Page::NotFound => render_not_found(frame, chunks[1]),
    }

    render_status_bar(frame, chunks[2], app);

    if let Some(error) = &app.error {
        render_error_popup(frame, error);
    }
}

/// Brand plus navigation tabs, with the active route highlighted
fn render_header(frame: &mut Frame, area: Rect, route: Route) {
    let tab = |label: &'static str, active: bool| {
        Span::styled(
            label,
            if active {
                Theme::nav_active()
            } else {
                Theme::nav_inactive()
            },
        )
    };

    let line = Line::from(vec![
        Span::styled(" DARKFLIX ", Theme::title()),
        Span::raw("  "),
        tab("Home", route == Route::Home),
        Span::raw("  "),
        tab("Movies", route == Route::MovieArchive),
        Span::raw("  "),
        tab("Series", route == Route::SeriesArchive),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );
    frame.render_widget(header, area);
}

fn render_not_found(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("404", Theme::title())),
        Line::from(""),
        Line::from(Span::styled("This page does not exist.", Theme::dimmed())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Theme::keybind()),
            Span::styled(" back   ", Theme::keybind_desc()),
            Span::styled("h", Theme::keybind()),
            Span::styled(" home", Theme::keybind_desc()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        area,
    );
}

/// Key hints on the left, playback state on the right
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" h", Theme::keybind()),
        Span::styled(" home ", Theme::keybind_desc()),
        Span::styled("m", Theme::keybind()),
        Span::styled(" movies ", Theme::keybind_desc()),
        Span::styled("t", Theme::keybind()),
        Span::styled(" series ", Theme::keybind_desc()),
        Span::styled("Esc", Theme::keybind()),
        Span::styled(" back ", Theme::keybind_desc()),
        Span::styled("q", Theme::keybind()),
        Span::styled(" quit", Theme::keybind_desc()),
    ];

    if let Some(line) = player::status_line(&app.player) {
        spans.push(Span::styled("  │  ", Theme::dimmed()));
        spans.extend(line);
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Theme::status_bar()),
        area,
    );
}

fn render_error_popup(frame: &mut Frame, error: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(error)
        .style(Theme::error())
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Theme::error()),
        );
    frame.render_widget(popup, area);
}

/// Centered rect helper for popups
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
