// Module declarations
mod app;
pub mod dashboard;
mod detail;
// Re-exports for external use
pub use app::{App, UIConfig, run};
