//! Row layout
//!
//! A row is horizontal (equal-width cards separated by a fixed gap) unless any
//! of its cards is flagged `fullWidth`, in which case the whole row stacks
//! vertically with no gap. The orientation is decided once per row here.

use super::card::{self, CardView};
use crate::config::Row;
use crate::consts::cli_consts::layout::{CARD_GAP, CARD_MIN_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn of(row: &Row) -> Self {
        if row.row.iter().any(|card| card.full_width) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub orientation: Orientation,
    pub cards: Vec<CardView>,
}

/// Lay out one row.
pub fn layout(row: &Row) -> RowView {
    RowView {
        orientation: Orientation::of(row),
        cards: row.row.iter().map(card::render).collect(),
    }
}

impl RowView {
    /// Rows without cards render nothing and take no space.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Height of the row in cells.
    pub fn height(&self) -> u16 {
        if self.is_empty() {
            return 0;
        }
        match self.orientation {
            Orientation::Horizontal => self
                .cards
                .iter()
                .map(|card| card.sizing().min_height())
                .max()
                .unwrap_or(CARD_MIN_HEIGHT),
            Orientation::Vertical => self
                .cards
                .iter()
                .map(|card| card.sizing().min_height())
                .fold(0u16, |total, h| total.saturating_add(h)),
        }
    }

    /// Split `area` into one rectangle per card, in card order.
    pub fn card_areas(&self, area: Rect) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        match self.orientation {
            Orientation::Horizontal => {
                Layout::horizontal(self.cards.iter().map(|_| Constraint::Fill(1)))
                    .spacing(CARD_GAP)
                    .split(area)
                    .to_vec()
            }
            Orientation::Vertical => Layout::vertical(
                self.cards
                    .iter()
                    .map(|card| Constraint::Length(card.sizing().min_height())),
            )
            .split(area)
            .to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Card, CardKind};
    use crate::consts::cli_consts::layout::FULL_WIDTH_CARD_MIN_HEIGHT;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(&format!("Card {}", i), "wifi", "#000000", ""))
            .collect()
    }

    #[test]
    fn test_row_without_full_width_is_horizontal() {
        let view = layout(&Row::new(cards(2)));
        assert_eq!(view.orientation, Orientation::Horizontal);
        assert_eq!(view.cards.len(), 2);
    }

    #[test]
    // One flagged card turns the whole row vertical, wherever it sits.
    fn test_any_full_width_card_makes_row_vertical() {
        for flagged in 0..4 {
            let mut row_cards = cards(4);
            row_cards[flagged].full_width = true;
            let view = layout(&Row::new(row_cards));
            assert_eq!(view.orientation, Orientation::Vertical, "flagged {}", flagged);
        }
    }

    #[test]
    // Stacking more cards than a u16 can measure pins the height at the maximum.
    fn test_very_long_vertical_row_height_saturates() {
        let mut row_cards = cards(10_000);
        row_cards[0].full_width = true;
        let view = layout(&Row::new(row_cards));
        assert_eq!(view.orientation, Orientation::Vertical);
        assert_eq!(view.height(), u16::MAX);

        let mut row_cards = cards(9_000);
        row_cards[0].full_width = true;
        let expected = FULL_WIDTH_CARD_MIN_HEIGHT + 8_999 * CARD_MIN_HEIGHT;
        assert_eq!(layout(&Row::new(row_cards)).height(), expected);
    }

    #[test]
    fn test_unknown_full_width_card_still_counts() {
        let mut row_cards = cards(2);
        row_cards[1].kind = CardKind::Unknown("carousel".into());
        row_cards[1].full_width = true;
        assert_eq!(layout(&Row::new(row_cards)).orientation, Orientation::Vertical);
    }

    #[test]
    fn test_horizontal_cards_share_width_equally() {
        for n in 1..=6u16 {
            let width = n * 20 + (n - 1) * CARD_GAP;
            let view = layout(&Row::new(cards(n as usize)));
            let areas = view.card_areas(Rect::new(0, 0, width, view.height()));
            assert_eq!(areas.len(), n as usize);
            assert!(areas.iter().all(|a| a.width == 20), "n={} {:?}", n, areas);
            assert!(areas.iter().all(|a| a.height == CARD_MIN_HEIGHT));
        }
    }

    #[test]
    fn test_horizontal_cards_are_separated_by_gap() {
        let view = layout(&Row::new(cards(3)));
        let areas = view.card_areas(Rect::new(0, 0, 34, CARD_MIN_HEIGHT));
        assert_eq!(areas[0].x, 0);
        assert_eq!(areas[1].x, areas[0].right() + CARD_GAP);
        assert_eq!(areas[2].x, areas[1].right() + CARD_GAP);
    }

    #[test]
    fn test_single_card_row_fills_width() {
        let view = layout(&Row::new(cards(1)));
        assert_eq!(view.orientation, Orientation::Horizontal);
        let areas = view.card_areas(Rect::new(2, 5, 40, view.height()));
        assert_eq!(areas, vec![Rect::new(2, 5, 40, CARD_MIN_HEIGHT)]);
    }

    #[test]
    fn test_vertical_row_stacks_without_gap() {
        let mut row_cards = cards(2);
        row_cards[0].full_width = true;
        let view = layout(&Row::new(row_cards));
        assert_eq!(
            view.height(),
            FULL_WIDTH_CARD_MIN_HEIGHT + CARD_MIN_HEIGHT
        );
        let areas = view.card_areas(Rect::new(0, 0, 30, view.height()));
        assert_eq!(areas[0], Rect::new(0, 0, 30, FULL_WIDTH_CARD_MIN_HEIGHT));
        assert_eq!(
            areas[1],
            Rect::new(0, FULL_WIDTH_CARD_MIN_HEIGHT, 30, CARD_MIN_HEIGHT)
        );
    }

    #[test]
    fn test_empty_row_is_a_no_op() {
        let view = layout(&Row::new(Vec::new()));
        assert!(view.is_empty());
        assert_eq!(view.height(), 0);
        assert!(view.card_areas(Rect::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn test_card_order_is_preserved() {
        let view = layout(&Row::new(cards(5)));
        let titles: Vec<&str> = view.cards.iter().filter_map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Card 0", "Card 1", "Card 2", "Card 3", "Card 4"]);
    }
}
