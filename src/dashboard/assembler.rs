//! Dashboard assembly
//!
//! Consumes a configuration document and produces the whole screen: a fixed
//! header plus the ordered rows inside a vertically scrollable body. The
//! assembler keeps no state; the scroll offset belongs to whoever draws the
//! result.

use super::row::{self, RowView};
use crate::config::DashboardConfig;
use crate::consts::cli_consts::layout::{CONTENT_PADDING, ROW_SPACING};
use crate::error::DashboardError;
use ratatui::layout::{Position, Rect};

/// Header content, copied verbatim from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub background_color: String,
    pub text_color: String,
}

/// The scrollable region holding all rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBody {
    pub rows: Vec<RowView>,
}

/// A card resolved to a rectangle in body coordinates (origin at the top-left
/// corner of the unscrolled body).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCard {
    pub row: usize,
    pub column: usize,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub screen: String,
    pub header: HeaderView,
    pub body: ScrollBody,
}

/// Assemble the screen for a configuration document.
pub fn assemble(config: &DashboardConfig) -> ScreenView {
    ScreenView {
        screen: config.screen.clone(),
        header: HeaderView {
            title: config.header.title.clone(),
            background_color: config.header.background_color.clone(),
            text_color: config.header.text_color.clone(),
        },
        body: ScrollBody {
            rows: config.content.iter().map(row::layout).collect(),
        },
    }
}

/// Parse and assemble in one step, failing before anything is rendered when
/// the document is malformed.
pub fn assemble_json(json: &str) -> Result<(DashboardConfig, ScreenView), DashboardError> {
    let config = DashboardConfig::from_json(json)?;
    let view = assemble(&config);
    Ok((config, view))
}

impl ScrollBody {
    /// Total height of the body content, including spacing after each row.
    pub fn content_height(&self) -> u16 {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.height().saturating_add(ROW_SPACING))
            .fold(0u16, |total, h| total.saturating_add(h))
    }

    /// Place every card for a body of the given width.
    pub fn place_cards(&self, width: u16) -> Vec<PlacedCard> {
        let inner_width = width.saturating_sub(CONTENT_PADDING * 2);
        let mut placed = Vec::new();
        let mut y = 0u16;
        for (row_index, row) in self.rows.iter().enumerate() {
            if row.is_empty() {
                continue;
            }
            let row_area = Rect::new(CONTENT_PADDING, y, inner_width, row.height());
            for (column, area) in row.card_areas(row_area).into_iter().enumerate() {
                placed.push(PlacedCard {
                    row: row_index,
                    column,
                    area,
                });
            }
            y = y.saturating_add(row.height()).saturating_add(ROW_SPACING);
        }
        placed
    }

    /// Card under a point given in body coordinates.
    pub fn card_at(&self, width: u16, position: Position) -> Option<PlacedCard> {
        self.place_cards(width)
            .into_iter()
            .find(|placed| placed.area.contains(position))
    }
}

impl ScreenView {
    /// All card views, row by row.
    pub fn cards(&self) -> impl Iterator<Item = &super::card::CardView> {
        self.body.rows.iter().flat_map(|row| row.cards.iter())
    }
}
