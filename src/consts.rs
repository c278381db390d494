pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Layout metrics are in terminal cells.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of navigation events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    pub mod layout {
        /// Minimum height of a card laid out at its row's share of the width.
        pub const CARD_MIN_HEIGHT: u16 = 7;

        /// Minimum height of a card flagged `fullWidth`.
        pub const FULL_WIDTH_CARD_MIN_HEIGHT: u16 = 8;

        /// Horizontal gap between cards of a horizontal row.
        pub const CARD_GAP: u16 = 2;

        /// Vertical space after each non-empty row.
        pub const ROW_SPACING: u16 = 1;

        /// Horizontal padding around the scrollable body.
        pub const CONTENT_PADDING: u16 = 1;

        /// Height of the screen header, borders included.
        pub const HEADER_HEIGHT: u16 = 3;

        /// Height of the footer.
        pub const FOOTER_HEIGHT: u16 = 2;

        /// Lines scrolled per PageUp/PageDown.
        pub const PAGE_SCROLL_LINES: u16 = 10;
    }

    // =============================================================================
    // ROUTING
    // =============================================================================

    pub mod routing {
        /// Application-relative root every route segment is appended to.
        pub const ROUTE_ROOT: &str = "/";

        /// Route segment of the dashboard itself.
        pub const INDEX_SEGMENT: &str = "index";
    }

    // =============================================================================
    // PATHS
    // =============================================================================

    pub mod paths {
        /// Directory under `$HOME` holding the dashboard document.
        pub const CONFIG_DIR: &str = ".home-dashboard";

        /// File name of the dashboard document.
        pub const CONFIG_FILE: &str = "dashboard.json";
    }
}
