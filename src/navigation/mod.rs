//! Screen stack
//!
//! Owns the stack of screens above the dashboard and decides what a route
//! intent leads to. Routes with no registered screen are not rejected: an
//! "unmatched route" page is pushed in their place.

pub mod screens;

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::routing::{INDEX_SEGMENT, ROUTE_ROOT};
use crate::dashboard::{RouteIntent, Router};
use crate::events::Event;
use screens::DetailScreen;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The configuration-driven home dashboard.
    Dashboard,
    Detail(&'static DetailScreen),
    /// Shown in place of a route nothing is registered for.
    Unmatched { route: String },
}

static DASHBOARD: Screen = Screen::Dashboard;

impl Screen {
    /// Root-relative path of the screen.
    pub fn route(&self) -> String {
        match self {
            Screen::Dashboard => ROUTE_ROOT.to_string(),
            Screen::Detail(detail) => format!("{}{}", ROUTE_ROOT, detail.route),
            Screen::Unmatched { route } => route.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No screen registered for route {0}")]
    Unmatched(String),

    #[error("Already at the dashboard")]
    AtRoot,
}

/// Stack-based router. The dashboard is always at the bottom.
#[derive(Debug)]
pub struct StackRouter {
    stack: Vec<Screen>,
    /// Activity logs for display (last `MAX_ACTIVITY_LOGS` events)
    activity_logs: VecDeque<Event>,
}

impl Default for StackRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl StackRouter {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Dashboard],
            activity_logs: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().unwrap_or(&DASHBOARD)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Resolve an intent to the screen it leads to.
    pub fn resolve(intent: &RouteIntent) -> Result<Screen, NavigationError> {
        let segment = intent.segment();
        if segment.is_empty() || segment == INDEX_SEGMENT {
            return Ok(Screen::Dashboard);
        }
        screens::lookup(segment)
            .map(Screen::Detail)
            .ok_or_else(|| NavigationError::Unmatched(intent.path().to_string()))
    }

    /// Apply an intent. An unmatched route still changes the screen.
    pub fn navigate(&mut self, intent: &RouteIntent) -> Result<(), NavigationError> {
        match Self::resolve(intent) {
            Ok(Screen::Dashboard) => {
                self.home();
                Ok(())
            }
            Ok(screen) => {
                if let Screen::Detail(detail) = &screen {
                    self.add_to_activity_log(Event::navigated(intent.path(), detail.heading));
                }
                self.stack.push(screen);
                Ok(())
            }
            Err(e) => {
                self.add_to_activity_log(Event::unmatched(intent.path()));
                self.stack.push(Screen::Unmatched {
                    route: intent.path().to_string(),
                });
                Err(e)
            }
        }
    }

    /// Pop the current screen.
    pub fn back(&mut self) -> Result<(), NavigationError> {
        if self.stack.len() <= 1 {
            return Err(NavigationError::AtRoot);
        }
        if let Some(screen) = self.stack.pop() {
            self.add_to_activity_log(Event::back(&screen.route()));
        }
        Ok(())
    }

    /// Unwind to the dashboard.
    pub fn home(&mut self) {
        if self.stack.len() > 1 {
            let from = self.current().route();
            self.stack.truncate(1);
            self.add_to_activity_log(Event::home(&from));
        }
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    /// Most recent event worth showing.
    pub fn last_displayed_event(&self) -> Option<&Event> {
        self.activity_logs
            .iter()
            .rev()
            .find(|event| event.should_display())
    }

    /// Add an event to activity logs with size limit
    fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

impl Router for StackRouter {
    fn push(&mut self, intent: RouteIntent) {
        if let Err(e) = self.navigate(&intent) {
            log::warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;

    fn intent(segment: &str) -> RouteIntent {
        RouteIntent::from_segment(segment)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let router = StackRouter::new();
        assert_eq!(router.current(), &Screen::Dashboard);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_registered_route_pushes_detail() {
        let mut router = StackRouter::new();
        router.push(intent("banking"));
        match router.current() {
            Screen::Detail(detail) => assert_eq!(detail.route, "banking"),
            other => panic!("unexpected screen {:?}", other),
        }
        assert_eq!(router.depth(), 2);
        assert_eq!(
            router.last_displayed_event().unwrap().event_type,
            EventType::Navigated
        );
    }

    #[test]
    fn test_unmatched_route_pushes_placeholder_screen() {
        let mut router = StackRouter::new();
        let result = router.navigate(&intent("my links"));
        assert_eq!(
            result,
            Err(NavigationError::Unmatched("/my links".to_string()))
        );
        assert_eq!(
            router.current(),
            &Screen::Unmatched {
                route: "/my links".to_string()
            }
        );
        assert_eq!(
            router.activity_logs().back().unwrap().event_type,
            EventType::Unmatched
        );
    }

    #[test]
    fn test_back_pops_until_root() {
        let mut router = StackRouter::new();
        router.push(intent("add"));
        router.push(intent("links"));
        assert_eq!(router.depth(), 3);

        assert!(router.back().is_ok());
        assert_eq!(router.current().route(), "/add");
        assert!(router.back().is_ok());
        assert_eq!(router.current(), &Screen::Dashboard);
        assert_eq!(router.back(), Err(NavigationError::AtRoot));
    }

    #[test]
    fn test_index_route_returns_home() {
        let mut router = StackRouter::new();
        router.push(intent("ideas"));
        router.push(intent("index"));
        assert_eq!(router.current(), &Screen::Dashboard);
        assert_eq!(router.depth(), 1);

        router.push(intent(""));
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut router = StackRouter::new();
        for _ in 0..(MAX_ACTIVITY_LOGS + 10) {
            router.push(intent("add"));
        }
        assert_eq!(router.activity_logs().len(), MAX_ACTIVITY_LOGS);
    }
}
