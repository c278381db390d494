//! Dashboard utility functions
//!
//! Color parsing and the glyph table standing in for the icon font.

use crate::events::EventType;
use ratatui::prelude::Color;

/// Glyph drawn for icon identifiers missing from the table.
pub const DEFAULT_GLYPH: &str = "•";

/// Parse a configured color (`#RRGGBB`, a color name or an index). Values the
/// terminal cannot represent fall back to the terminal default.
pub fn parse_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or(Color::Reset)
}

/// Glyph for a concrete icon identifier.
pub fn glyph_for(icon: &str) -> &'static str {
    match icon {
        "attach-money" => "$",
        "lightbulb" => "☼",
        "add-circle" => "⊕",
        "attach-file" => "§",
        "wifi" => "≋",
        "arrow-back" => "←",
        "help-outline" => "?",
        _ => DEFAULT_GLYPH,
    }
}

/// Get a ratatui color for an activity event
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Navigated => Color::LightGreen,
        EventType::Unmatched => Color::LightRed,
        EventType::Back | EventType::Home => Color::Gray,
    }
}

/// Format compact timestamp with time only from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    timestamp
        .split(' ')
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| timestamp.to_string())
}
