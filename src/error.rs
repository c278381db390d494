//! Error types for loading and assembling dashboards

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The configuration document is not valid JSON or misses a required
    /// field (`header`, `content` or a row's `row`).
    #[error("Malformed dashboard config: {0}")]
    MalformedConfig(#[from] serde_json::Error),

    /// Reading or writing the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
