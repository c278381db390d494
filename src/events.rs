//! Navigation Events
//!
//! Records of what the router did with each intent, kept for the activity
//! line in the footer and mirrored to the `log` facade.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A detail screen was pushed.
    Navigated,
    /// The route matched no registered screen.
    Unmatched,
    /// A screen was popped.
    Back,
    /// The stack was unwound to the dashboard.
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Route the event concerns.
    pub route: String,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(route: &str, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        log::log!(log::Level::from(log_level), "{}", msg);
        Self {
            route: route.to_string(),
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn navigated(route: &str, title: &str) -> Self {
        Self::new(
            route,
            format!("Opened {} ({})", title, route),
            EventType::Navigated,
            LogLevel::Info,
        )
    }

    pub fn unmatched(route: &str) -> Self {
        Self::new(
            route,
            format!("Unmatched route: {}", route),
            EventType::Unmatched,
            LogLevel::Warn,
        )
    }

    pub fn back(route: &str) -> Self {
        Self::new(
            route,
            format!("Back from {}", route),
            EventType::Back,
            LogLevel::Debug,
        )
    }

    pub fn home(route: &str) -> Self {
        Self::new(
            route,
            "Returned to dashboard".to_string(),
            EventType::Home,
            LogLevel::Info,
        )
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
