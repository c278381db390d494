//! Dashboard main renderer

use super::components::{body, footer, header};
use super::state::DashboardState;
use crate::consts::cli_consts::layout::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::events::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Background painted when background colors are enabled.
pub const BACKGROUND: Color = Color::Rgb(16, 20, 24);

/// Split the screen into header, scrollable body and footer. The header sits
/// outside the scrollable region.
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area)
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, last_event: Option<&Event>) {
    let background = if state.with_background_color {
        Style::default().bg(BACKGROUND)
    } else {
        Style::default()
    };
    f.render_widget(Block::default().style(background), f.area());

    let [header_area, body_area, footer_area] = screen_layout(f.area());

    header::render_header(f, header_area, &state.view.header);
    body::render_body(f, body_area, state, background);
    footer::render_footer(f, footer_area, footer::DASHBOARD_HINTS, last_event);
}
