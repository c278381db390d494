//! Navigation dispatch
//!
//! A card's destination is derived from its own data: an explicit `routeKey`
//! when present, otherwise the lower-cased title. The segment is used
//! verbatim; titles with spaces or punctuation give literal segments and
//! duplicate titles give duplicate routes. Whether the route exists is for
//! the [`Router`] to find out.

use crate::config::Card;
use crate::consts::cli_consts::routing::ROUTE_ROOT;
use std::fmt::{Display, Formatter};
use tokio::sync::mpsc;

#[cfg(test)]
use mockall::automock;

/// An abstract navigation request: a root-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteIntent {
    path: String,
}

impl RouteIntent {
    /// Build an intent for a single path segment appended to the route root.
    pub fn from_segment(segment: &str) -> Self {
        Self {
            path: format!("{}{}", ROUTE_ROOT, segment),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path without the route root.
    pub fn segment(&self) -> &str {
        self.path.strip_prefix(ROUTE_ROOT).unwrap_or(&self.path)
    }
}

impl Display for RouteIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Receives route intents. Implementors own the screen stack and decide what
/// to do with routes that lead nowhere.
#[cfg_attr(test, automock)]
pub trait Router {
    fn push(&mut self, intent: RouteIntent);
}

/// Fire-and-forget hand-off to a UI loop draining the other end.
impl Router for mpsc::UnboundedSender<RouteIntent> {
    fn push(&mut self, intent: RouteIntent) {
        if let Err(e) = self.send(intent) {
            log::warn!("Navigation receiver dropped, discarding {}", e.0);
        }
    }
}

/// Compute the route for a card.
pub fn dispatch(card: &Card) -> RouteIntent {
    match &card.route_key {
        Some(route_key) => RouteIntent::from_segment(route_key),
        None => RouteIntent::from_segment(&card.title.to_lowercase()),
    }
}

/// Compute the route for a card and hand it to the router.
pub fn issue<R: Router + ?Sized>(card: &Card, router: &mut R) {
    let intent = dispatch(card);
    log::debug!("Dispatching {} for card {:?}", intent, card.title);
    router.push(intent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_lower_cased_into_segment() {
        let card = Card::new("Banking", "dollar-sign", "#673AB7", "");
        assert_eq!(dispatch(&card).path(), "/banking");
        assert_eq!(dispatch(&card).segment(), "banking");
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let card = Card::new("Banking", "dollar-sign", "#673AB7", "");
        let first = dispatch(&card);
        for _ in 0..10 {
            assert_eq!(dispatch(&card), first);
        }
    }

    #[test]
    // Only the title matters for the derived route.
    fn test_dispatch_ignores_presentation_fields() {
        let a = Card::new("Ideas", "lightbulb", "#E91E63", "one");
        let b = Card::new("Ideas", "wifi", "#000000", "two").full_width();
        assert_eq!(dispatch(&a), dispatch(&b));
    }

    #[test]
    fn test_no_normalization_beyond_case_folding() {
        let card = Card::new(" My Links! ", "paperclip", "#FFC107", "");
        assert_eq!(dispatch(&card).path(), "/ my links! ");
    }

    #[test]
    fn test_duplicate_titles_share_a_route() {
        let a = Card::new("Add", "plus-circle", "#009688", "");
        let b = Card::new("Add", "wifi", "#673AB7", "").full_width();
        assert_eq!(dispatch(&a).path(), "/add");
        assert_eq!(dispatch(&a), dispatch(&b));
    }

    #[test]
    fn test_route_key_takes_precedence_verbatim() {
        let card = Card::new("My Bank", "dollar-sign", "#673AB7", "").with_route_key("Banking");
        assert_eq!(dispatch(&card).path(), "/Banking");
    }

    #[test]
    fn test_empty_title_routes_to_root() {
        let card = Card::new("", "", "", "");
        assert_eq!(dispatch(&card).path(), "/");
        assert_eq!(dispatch(&card).segment(), "");
    }

    #[test]
    fn test_issue_pushes_intent_to_router() {
        let card = Card::new("Links", "paperclip", "#FFC107", "");
        let mut router = MockRouter::new();
        router
            .expect_push()
            .withf(|intent| intent.path() == "/links")
            .times(1)
            .return_const(());
        issue(&card, &mut router);
    }

    #[test]
    fn test_issue_through_channel_is_fire_and_forget() {
        let (mut sender, mut receiver) = mpsc::unbounded_channel();
        let card = Card::new("Ideas", "lightbulb", "#E91E63", "");
        issue(&card, &mut sender);
        assert_eq!(receiver.try_recv().unwrap().path(), "/ideas");

        // A closed receiver must not surface as a failure to the caller.
        drop(receiver);
        issue(&card, &mut sender);
    }
}
