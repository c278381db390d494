//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod body;
pub mod card;
pub mod footer;
pub mod header;
