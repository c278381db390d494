//! Semantic icon resolution
//!
//! Cards name icons by concept ("dollar-sign", "paperclip"). The icon set the
//! presentation layer draws from uses its own identifiers, so the concept is
//! translated here. Keys outside the table pass through unchanged.

/// Semantic key -> concrete icon identifier.
const ICON_MAPPING: [(&str, &str); 5] = [
    ("dollar-sign", "attach-money"),
    ("lightbulb", "lightbulb"),
    ("plus-circle", "add-circle"),
    ("paperclip", "attach-file"),
    ("wifi", "wifi"),
];

/// Returned for an empty key so a badge always names some icon.
pub const FALLBACK_ICON: &str = "help-outline";

/// Resolve a semantic icon key to a concrete icon identifier.
pub fn resolve(semantic_key: &str) -> &str {
    if semantic_key.is_empty() {
        return FALLBACK_ICON;
    }
    ICON_MAPPING
        .iter()
        .find(|(key, _)| *key == semantic_key)
        .map(|(_, icon)| *icon)
        .unwrap_or(semantic_key)
}
