//! Card rendering
//!
//! Turns one configured card into a view: icon badge, title, description.
//! A card's own sizing depends only on its `fullWidth` flag, never on its
//! siblings.

use super::dispatch::{self, Router};
use super::icons;
use crate::config::{Card, CardKind};
use crate::consts::cli_consts::layout::{CARD_MIN_HEIGHT, FULL_WIDTH_CARD_MIN_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSizing {
    Single,
    FullWidth,
}

impl CardSizing {
    pub fn of(card: &Card) -> Self {
        if card.full_width {
            CardSizing::FullWidth
        } else {
            CardSizing::Single
        }
    }

    pub fn min_height(self) -> u16 {
        match self {
            CardSizing::Single => CARD_MIN_HEIGHT,
            CardSizing::FullWidth => FULL_WIDTH_CARD_MIN_HEIGHT,
        }
    }
}

/// Icon drawn on a colored badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBadge {
    /// Concrete icon identifier, already resolved.
    pub icon: String,
    /// Badge background color, passed through as configured.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub badge: IconBadge,
    pub title: String,
    pub description: String,
    pub sizing: CardSizing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    /// A regular, activatable card.
    Tile(TileView),
    /// Stand-in for a card kind this build does not know.
    Placeholder { sizing: CardSizing },
}

impl CardView {
    pub fn sizing(&self) -> CardSizing {
        match self {
            CardView::Tile(tile) => tile.sizing,
            CardView::Placeholder { sizing } => *sizing,
        }
    }

    pub fn is_activatable(&self) -> bool {
        matches!(self, CardView::Tile(_))
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            CardView::Tile(tile) => Some(&tile.title),
            CardView::Placeholder { .. } => None,
        }
    }
}

/// Render one card.
pub fn render(card: &Card) -> CardView {
    let sizing = CardSizing::of(card);
    match &card.kind {
        CardKind::Card => CardView::Tile(TileView {
            badge: IconBadge {
                icon: icons::resolve(&card.icon).to_string(),
                color: card.icon_color.clone(),
            },
            title: card.title.clone(),
            description: card.description.clone(),
            sizing,
        }),
        CardKind::Unknown(_) => CardView::Placeholder { sizing },
    }
}

/// Handle a tap/click/press on a card. Placeholders do nothing.
pub fn on_activate<R: Router + ?Sized>(card: &Card, router: &mut R) {
    match &card.kind {
        CardKind::Card => dispatch::issue(card, router),
        CardKind::Unknown(raw) => {
            log::debug!("Ignoring activation of unknown card type {}", raw)
        }
    }
}
