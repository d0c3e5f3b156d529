//! Home page: stacked card rows
//!
//! Continue-watching and favorites rows appear only when non-empty, then
//! the full catalog row. The focused row gets the highlighted border and
//! its cards scroll horizontally.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{HomeState, Row as CardRow};
use crate::ui::Theme;

const CARD_WIDTH: u16 = 22;

pub fn render(frame: &mut Frame, area: Rect, state: &mut HomeState) {
    if state.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No titles available.")
                .style(Theme::dimmed())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let constraints: Vec<Constraint> = state
        .rows
        .iter()
        .map(|_| Constraint::Length(5))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let focused = state.row;
    for (i, row) in state.rows.iter_mut().enumerate() {
        if let Some(chunk) = chunks.get(i) {
            render_row(frame, *chunk, row, i == focused);
        }
    }
}

/// One horizontal row of title cards
fn render_row(frame: &mut Frame, area: Rect, row: &mut CardRow, focused: bool) {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(format!(" {} ", row.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if row.cards.is_empty() {
        return;
    }

    let visible = (inner.width / CARD_WIDTH).max(1) as usize;
    row.list.scroll_into_view(visible);

    let mut x = inner.x;
    for (i, card) in row.cards.iter().enumerate().skip(row.list.offset) {
        if x + CARD_WIDTH > inner.x + inner.width {
            break;
        }
        let selected = focused && i == row.list.selected;
        let style = if selected {
            Theme::list_item_selected()
        } else {
            Theme::list_item()
        };

        let mut lines = vec![Line::from(Span::styled(
            truncate(&card.title, CARD_WIDTH as usize - 2),
            style,
        ))];
        if let Some(label) = card.resume_label() {
            lines.push(Line::from(Span::styled(label, Theme::accent())));
        }

        let card_area = Rect::new(x, inner.y, CARD_WIDTH - 1, inner.height);
        frame.render_widget(Paragraph::new(lines), card_area);
        x += CARD_WIDTH;
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
