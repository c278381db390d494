//! Dashboard footer component
//!
//! Renders key hints and the latest navigation event

use super::super::utils::{format_compact_timestamp, get_event_color};
use crate::events::Event;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const DASHBOARD_HINTS: &str = "[Tab] Next | [Enter] Open | [PgUp/PgDn] Scroll | [Q] Quit";
pub const DETAIL_HINTS: &str = "[Backspace] Back | [H] Home | [Q] Quit";

/// Render footer with key hints on the left and the last event on the right.
pub fn render_footer(f: &mut Frame, area: Rect, hints: &str, last_event: Option<&Event>) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [hints_area, event_area] = Layout::horizontal([
        Constraint::Length(hints.chars().count() as u16),
        Constraint::Fill(1),
    ])
    .spacing(1)
    .areas(inner);

    let hints = Paragraph::new(hints.to_string()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(hints, hints_area);

    if let Some(event) = last_event {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", format_compact_timestamp(&event.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                event.msg.clone(),
                Style::default().fg(get_event_color(event.event_type)),
            ),
        ])
        .right_aligned();
        f.render_widget(Paragraph::new(line), event_area);
    }
}
