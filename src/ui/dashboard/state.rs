//! Dashboard state management
//!
//! Holds the assembled screen plus the presentation-only state around it:
//! keyboard focus, scroll offset and the body area last laid out.

use crate::dashboard::{PlacedCard, ScreenView};
use crate::ui::app::UIConfig;
use ratatui::layout::{Position, Rect};

#[derive(Debug)]
pub struct DashboardState {
    /// The assembled dashboard.
    pub view: ScreenView,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// (row, column) of every activatable card, in presentation order.
    focusable: Vec<(usize, usize)>,
    /// Index into `focusable`.
    focus: Option<usize>,
    /// First body line shown.
    scroll: u16,
    /// Screen area of the scrollable body.
    body_area: Rect,
}

impl DashboardState {
    pub fn new(view: ScreenView, ui_config: &UIConfig) -> Self {
        let focusable: Vec<(usize, usize)> = view
            .body
            .rows
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| {
                row.cards
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| card.is_activatable())
                    .map(move |(column, _)| (row_index, column))
            })
            .collect();
        let focus = if focusable.is_empty() { None } else { Some(0) };
        Self {
            view,
            with_background_color: ui_config.with_background_color,
            focusable,
            focus,
            scroll: 0,
            body_area: Rect::default(),
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn body_area(&self) -> Rect {
        self.body_area
    }

    /// Record where the body is drawn and keep the scroll offset in range.
    pub fn set_body_area(&mut self, area: Rect) {
        self.body_area = area;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn max_scroll(&self) -> u16 {
        self.view
            .body
            .content_height()
            .saturating_sub(self.body_area.height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
    }

    pub fn focused_position(&self) -> Option<(usize, usize)> {
        self.focus.and_then(|index| self.focusable.get(index).copied())
    }

    pub fn is_focused(&self, row: usize, column: usize) -> bool {
        self.focused_position() == Some((row, column))
    }

    pub fn focus_next(&mut self) {
        if let Some(index) = self.focus {
            self.focus = Some((index + 1) % self.focusable.len());
            self.ensure_focus_visible();
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(index) = self.focus {
            let len = self.focusable.len();
            self.focus = Some((index + len - 1) % len);
            self.ensure_focus_visible();
        }
    }

    /// Focus the card at (row, column) if it is activatable.
    pub fn focus_position(&mut self, row: usize, column: usize) {
        if let Some(index) = self.focusable.iter().position(|p| *p == (row, column)) {
            self.focus = Some(index);
        }
    }

    /// Activatable card under a screen position, if any.
    pub fn card_at_screen(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if !self.body_area.contains(Position::new(column, row)) {
            return None;
        }
        let position = Position::new(
            column - self.body_area.x,
            row - self.body_area.y + self.scroll,
        );
        self.view
            .body
            .card_at(self.body_area.width, position)
            .map(|placed| (placed.row, placed.column))
            .filter(|position| self.focusable.contains(position))
    }

    fn focused_placement(&self) -> Option<PlacedCard> {
        let (row, column) = self.focused_position()?;
        self.view
            .body
            .place_cards(self.body_area.width)
            .into_iter()
            .find(|placed| placed.row == row && placed.column == column)
    }

    /// Scroll just enough to bring the focused card into view.
    fn ensure_focus_visible(&mut self) {
        let Some(placed) = self.focused_placement() else {
            return;
        };
        let viewport = self.body_area.height;
        if placed.area.y < self.scroll || placed.area.height >= viewport {
            self.scroll = placed.area.y;
        } else if placed.area.bottom() > self.scroll.saturating_add(viewport) {
            self.scroll = placed.area.bottom() - viewport;
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
