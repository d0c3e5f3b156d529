//! Archive pages: the single-kind catalog list
//!
//! Movies and series archives share the renderer; only the heading and the
//! card set differ.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::ArchiveState;
use crate::models::TitleKind;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &mut ArchiveState) {
    let heading = match state.kind {
        TitleKind::Movie => " Movies ",
        TitleKind::Series => " Series ",
    };

    let block = Block::default()
        .title(heading)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    if state.cards.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("Nothing here yet.")
                .style(Theme::dimmed())
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let visible = block.inner(area).height as usize;
    state.list.scroll_into_view(visible);

    let items: Vec<ListItem> = state
        .cards
        .iter()
        .enumerate()
        .skip(state.list.offset)
        .take(visible)
        .map(|(i, card)| {
            let style = if i == state.list.selected {
                Theme::list_item_selected()
            } else {
                Theme::list_item()
            };
            let mut spans = vec![Span::styled(card.title.clone(), style)];
            if let Some(label) = card.resume_label() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(label, Theme::accent()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
