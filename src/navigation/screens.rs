//! Registered detail screens
//!
//! Fixed-shape pages reached from the dashboard. Each is keyed by its route
//! segment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Colored header with a back button, icon badge above the heading.
    WithHeader,
    /// Centered heading and description, no header.
    Plain,
    /// Framed overlay with a title bar.
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailScreen {
    pub route: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    /// Concrete icon identifier and badge color.
    pub icon: Option<(&'static str, &'static str)>,
    /// Header bar color for `Presentation::WithHeader`.
    pub header_color: &'static str,
    pub presentation: Presentation,
}

const HEADER_COLOR: &str = "#FFC107";

pub static SCREENS: [DetailScreen; 6] = [
    DetailScreen {
        route: "explore",
        heading: "Explore",
        description: "Browse everything the app has to offer.",
        icon: None,
        header_color: HEADER_COLOR,
        presentation: Presentation::Plain,
    },
    DetailScreen {
        route: "banking",
        heading: "Banking",
        description: "Check your bank activities, balances and recent transfers.",
        icon: Some(("attach-money", "#673AB7")),
        header_color: HEADER_COLOR,
        presentation: Presentation::WithHeader,
    },
    DetailScreen {
        route: "ideas",
        heading: "Ideas",
        description: "Capture ideas and come back to them later.",
        icon: Some(("lightbulb", "#E91E63")),
        header_color: HEADER_COLOR,
        presentation: Presentation::WithHeader,
    },
    DetailScreen {
        route: "add",
        heading: "Add New",
        description: "Add new items, create content, or start something new.",
        icon: Some(("add-circle", "#009688")),
        header_color: HEADER_COLOR,
        presentation: Presentation::WithHeader,
    },
    DetailScreen {
        route: "links",
        heading: "Links",
        description: "Manage and organize your important links and resources.",
        icon: None,
        header_color: HEADER_COLOR,
        presentation: Presentation::Plain,
    },
    DetailScreen {
        route: "modal",
        heading: "Modal",
        description: "This is a modal screen.",
        icon: None,
        header_color: HEADER_COLOR,
        presentation: Presentation::Modal,
    },
];

/// Look up the screen registered under a route segment. Matching is exact.
pub fn lookup(segment: &str) -> Option<&'static DetailScreen> {
    SCREENS.iter().find(|screen| screen.route == segment)
}
