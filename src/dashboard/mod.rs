//! Configuration-driven dashboard engine
//!
//! Leaf-first: icon resolution, card rendering, row layout, navigation
//! dispatch, and the assembler tying them together.

pub mod assembler;
pub mod card;
pub mod dispatch;
pub mod icons;
pub mod row;

// Re-export main types and functions for external use
pub use assembler::{PlacedCard, ScreenView, assemble};
pub use card::CardView;
pub use dispatch::{RouteIntent, Router};
pub use row::Orientation;
