//! Dashboard screen
//!
//! Split into state, renderer and per-component modules

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::{render_dashboard, screen_layout};
pub use state::DashboardState;
