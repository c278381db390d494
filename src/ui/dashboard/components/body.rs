//! Dashboard body component
//!
//! Renders all rows into an off-screen buffer the height of the content, then
//! copies the visible window into the frame.

use super::super::state::DashboardState;
use super::card::render_card;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::Style;

/// Render the scrollable body.
pub fn render_body(f: &mut Frame, area: Rect, state: &DashboardState, background: Style) {
    if area.is_empty() {
        return;
    }
    let body = &state.view.body;
    let content_height = body.content_height().max(area.height);
    let mut content = Buffer::empty(Rect::new(0, 0, area.width, content_height));
    content.set_style(content.area, background);

    for placed in body.place_cards(area.width) {
        let card = body
            .rows
            .get(placed.row)
            .and_then(|row| row.cards.get(placed.column));
        if let Some(card) = card {
            render_card(
                card,
                placed.area,
                &mut content,
                state.is_focused(placed.row, placed.column),
            );
        }
    }

    let scroll = state.scroll();
    let frame_buf = f.buffer_mut();
    for dy in 0..area.height {
        let src_y = scroll.saturating_add(dy);
        if src_y >= content_height {
            break;
        }
        for dx in 0..area.width {
            let Some(src) = content.cell(Position::new(dx, src_y)) else {
                continue;
            };
            if let Some(dst) = frame_buf.cell_mut(Position::new(area.x + dx, area.y + dy)) {
                *dst = src.clone();
            }
        }
    }
}
