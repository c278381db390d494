//! Dashboard card component
//!
//! Draws one card view: icon badge, title, description, vertically centered

use super::super::utils::{glyph_for, parse_color};
use crate::dashboard::card::CardView;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Render a card into `buf`. The focused card gets a thick highlighted border.
pub fn render_card(card: &CardView, area: Rect, buf: &mut Buffer, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = match card {
        CardView::Tile(tile) => vec![
            Line::from(Span::styled(
                format!(" {} ", glyph_for(&tile.badge.icon)),
                Style::default()
                    .bg(parse_color(&tile.badge.color))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                tile.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tile.description.clone(),
                Style::default().fg(Color::Gray),
            )),
        ],
        CardView::Placeholder { .. } => vec![Line::from(Span::styled(
            "·",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    // Empty strings still take their line, so every card keeps the same shape.
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(text_area, buf);
}
