//! Dashboard header component
//!
//! Renders the title bar in the colors the document asks for

use super::super::utils::{glyph_for, parse_color};
use crate::dashboard::assembler::HeaderView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the dashboard header.
pub fn render_header(f: &mut Frame, area: Rect, header: &HeaderView) {
    render_title_bar(
        f,
        area,
        &header.title,
        &header.background_color,
        &header.text_color,
        false,
    );
}

/// Render a colored title bar, optionally with a back arrow on the left.
pub fn render_title_bar(
    f: &mut Frame,
    area: Rect,
    title: &str,
    background_color: &str,
    text_color: &str,
    with_back: bool,
) {
    let style = Style::default()
        .bg(parse_color(background_color))
        .fg(parse_color(text_color));

    let mut spans = Vec::new();
    if with_back {
        spans.push(Span::raw(format!("{}  ", glyph_for("arrow-back"))));
    }
    spans.push(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let title_bar = Paragraph::new(Line::from(spans))
        .alignment(if with_back {
            Alignment::Left
        } else {
            Alignment::Center
        })
        .style(style)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .style(style),
        );
    f.render_widget(title_bar, area);
}
