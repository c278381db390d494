//! Detail screen rendering
//!
//! Static pages reached from the dashboard, plus the page shown for routes
//! nothing is registered for.

use crate::consts::cli_consts::layout::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::events::Event;
use crate::navigation::screens::{DetailScreen, Presentation};
use crate::ui::dashboard::components::{footer, header};
use crate::ui::dashboard::utils::{glyph_for, parse_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Widest the description text is allowed to run.
const MAX_TEXT_WIDTH: u16 = 40;

/// Header title color on detail screens.
const HEADER_TEXT_COLOR: &str = "#FFFFFF";

fn detail_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area)
}

/// Center a block of `height` lines, at most `MAX_TEXT_WIDTH` wide, in `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(MAX_TEXT_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [middle] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    middle
}

fn text_lines(detail: &DetailScreen) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some((icon, color)) = detail.icon {
        lines.push(Line::from(Span::styled(
            format!("  {}  ", glyph_for(icon)),
            Style::default()
                .bg(parse_color(color))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        detail.heading,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        detail.description,
        Style::default().fg(Color::Gray),
    )));
    lines
}

pub fn render_detail(f: &mut Frame, detail: &DetailScreen, last_event: Option<&Event>) {
    let [header_area, body_area, footer_area] = detail_layout(f.area());

    match detail.presentation {
        Presentation::WithHeader => {
            header::render_title_bar(
                f,
                header_area,
                detail.heading,
                detail.header_color,
                HEADER_TEXT_COLOR,
                true,
            );
            render_text(f, body_area, text_lines(detail));
        }
        Presentation::Plain => {
            render_text(f, header_area.union(body_area), text_lines(detail));
        }
        Presentation::Modal => {
            let area = centered(body_area, 7);
            let modal = Paragraph::new(detail.description)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(detail.heading)
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Cyan))
                        .padding(Padding::uniform(1)),
                );
            f.render_widget(Clear, area);
            f.render_widget(modal, area);
        }
    }

    footer::render_footer(f, footer_area, footer::DETAIL_HINTS, last_event);
}

/// Page shown when a route leads nowhere.
pub fn render_unmatched(f: &mut Frame, route: &str, last_event: Option<&Event>) {
    let [header_area, body_area, footer_area] = detail_layout(f.area());
    header::render_title_bar(f, header_area, "Oops!", "#F44336", HEADER_TEXT_COLOR, true);

    let lines = vec![
        Line::from(Span::styled(
            "Unmatched Route",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Page could not be found: {}", route),
            Style::default().fg(Color::Gray),
        )),
    ];
    render_text(f, body_area, lines);
    footer::render_footer(f, footer_area, footer::DETAIL_HINTS, last_event);
}

fn render_text(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16).saturating_add(2);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, centered(area, height));
}
