//! Handler registration system.
//!
//! The registry maps each event kind to the handlers it triggers, in
//! registration order.

use std::collections::HashMap;
use std::sync::Arc;

use crate::decoding::EventKind;

use super::traits::EventHandler;

/// Registry of all transformation handlers, built at startup.
pub struct TransformationRegistry {
    /// Handlers indexed by event kind, in registration order
    event_handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
    all_handlers: Vec<Arc<dyn EventHandler>>,
}

impl TransformationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            event_handlers: HashMap::new(),
            all_handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    ///
    /// The handler will be invoked for all events matching its triggers.
    pub fn register_event_handler<H: EventHandler + 'static>(&mut self, handler: H) {
        let handler: Arc<dyn EventHandler> = Arc::new(handler);

        for kind in handler.triggers() {
            let handlers = self.event_handlers.entry(kind).or_default();
            if !handlers.iter().any(|h| h.name() == handler.name()) {
                handlers.push(handler.clone());
            }
        }

        self.all_handlers.push(handler);
    }

    /// Get handlers for a specific event kind.
    pub fn handlers_for_event(&self, kind: &EventKind) -> &[Arc<dyn EventHandler>] {
        self.event_handlers
            .get(kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get all event kinds that trigger at least one handler.
    pub fn all_event_triggers(&self) -> Vec<EventKind> {
        self.event_handlers.keys().cloned().collect()
    }

    pub fn all_handlers(&self) -> &[Arc<dyn EventHandler>] {
        &self.all_handlers
    }

    /// Check if any handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.all_handlers.is_empty()
    }

    /// Get count of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.all_handlers.len()
    }
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the transformation registry with all handlers.
///
/// Registration order is the order batches are concatenated in.
pub fn build_registry() -> TransformationRegistry {
    let mut registry = TransformationRegistry::new();

    super::event::register_handlers(&mut registry);

    tracing::info!(
        "Built transformation registry with {} handlers ({} event triggers)",
        registry.handler_count(),
        registry.all_event_triggers().len()
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Collection;

    #[test]
    fn test_every_known_event_has_a_handler() {
        let registry = build_registry();
        for kind in EventKind::KNOWN.iter() {
            assert!(
                !registry.handlers_for_event(kind).is_empty(),
                "no handler for {}",
                kind
            );
        }
        assert!(registry
            .handlers_for_event(&EventKind::Unknown("0x1".into()))
            .is_empty());
    }

    #[test]
    fn test_registration_order() {
        let registry = build_registry();
        let order: Vec<Collection> = registry
            .all_handlers()
            .iter()
            .map(|h| h.collection())
            .collect();
        assert_eq!(order, Collection::ALL.to_vec());

        let start_game: Vec<Collection> = registry
            .handlers_for_event(&EventKind::StartGame)
            .iter()
            .map(|h| h.collection())
            .collect();
        assert_eq!(start_game, vec![Collection::Adventurers, Collection::Items]);
    }
}
