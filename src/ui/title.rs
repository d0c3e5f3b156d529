//! Title page: resolved metadata plus series controls
//!
//! Movies show the info panel alone; series add season and episode pick
//! lists on the right. A series with no episode records shows a placeholder
//! where the controls would be.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{TitleFocus, TitleState};
use crate::models::{format_resume, TitleKind};
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &mut TitleState) {
    match state.kind {
        TitleKind::Movie => render_info(frame, area, state),
        TitleKind::Series => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            render_info(frame, chunks[0], state);
            render_series_controls(frame, chunks[1], state);
        }
    }
}

fn render_info(frame: &mut Frame, area: Rect, state: &TitleState) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(state.title.clone(), Theme::title()),
            Span::raw("  "),
            Span::styled(format!("[{}]", state.kind), Theme::dimmed()),
            Span::raw("  "),
            if state.favorite {
                Span::styled("★ My List", Theme::accent())
            } else {
                Span::styled("☆", Theme::dimmed())
            },
        ]),
        Line::from(""),
    ];

    if let Some(resume) = state.resume {
        lines.push(Line::from(Span::styled(
            format!("Resume from {}", format_resume(resume)),
            Theme::accent(),
        )));
        lines.push(Line::from(""));
    }

    match &state.overview {
        Some(overview) => lines.push(Line::from(overview.clone())),
        None => lines.push(Line::from(Span::styled(
            "No overview available.",
            Theme::dimmed(),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Theme::keybind()),
        Span::styled(" play   ", Theme::keybind_desc()),
        Span::styled("f", Theme::keybind()),
        Span::styled(" favorite   ", Theme::keybind_desc()),
        Span::styled("Tab", Theme::keybind()),
        Span::styled(" switch panel", Theme::keybind_desc()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        ),
        area,
    );
}

fn render_series_controls(frame: &mut Frame, area: Rect, state: &mut TitleState) {
    let Some(selector) = &state.selector else {
        return;
    };

    if selector.is_empty() {
        frame.render_widget(
            Paragraph::new("No episodes listed for this series.")
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Theme::border()),
                ),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((2 + selector.seasons().len() as u16).max(4)),
            Constraint::Min(3),
        ])
        .split(area);

    // Seasons
    let season_border = if state.focus == TitleFocus::Seasons {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let season_items: Vec<ListItem> = selector
        .seasons()
        .iter()
        .enumerate()
        .map(|(i, season)| {
            let style = if i == state.season_list.selected {
                Theme::list_item_selected()
            } else {
                Theme::list_item()
            };
            ListItem::new(Span::styled(format!("Season {}", season), style))
        })
        .collect();
    frame.render_widget(
        List::new(season_items).block(
            Block::default()
                .title(" Seasons ")
                .borders(Borders::ALL)
                .border_style(season_border),
        ),
        chunks[0],
    );

    // Episodes of the selected season
    let episode_border = if state.focus == TitleFocus::Episodes {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let episode_block = Block::default()
        .title(" Episodes ")
        .borders(Borders::ALL)
        .border_style(episode_border);
    let visible = episode_block.inner(chunks[1]).height as usize;
    state.episode_list.scroll_into_view(visible);

    let episode_items: Vec<ListItem> = selector
        .options()
        .iter()
        .enumerate()
        .skip(state.episode_list.offset)
        .take(visible)
        .map(|(i, option)| {
            let style = if i == state.episode_list.selected {
                Theme::list_item_selected()
            } else {
                Theme::list_item()
            };
            ListItem::new(Span::styled(
                format!("E{:02}  {}", option.episode, option.label),
                style,
            ))
        })
        .collect();
    frame.render_widget(List::new(episode_items).block(episode_block), chunks[1]);
}
