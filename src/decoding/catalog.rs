use std::collections::HashMap;

use super::error::DecodeError;
use super::event_parsing::{EventKind, SelectorTable};
use super::parser::Parser;
use super::payloads::GameEvent;
use super::schema::event_layout;

/// Selector table plus one prebuilt payload parser per known event.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    selectors: SelectorTable,
    layouts: HashMap<EventKind, Parser>,
}

impl EventCatalog {
    pub fn new() -> Self {
        let layouts = EventKind::KNOWN
            .iter()
            .filter_map(|kind| event_layout(kind).map(|parser| (kind.clone(), parser)))
            .collect();
        Self {
            selectors: SelectorTable::new(),
            layouts,
        }
    }

    /// Resolve the discriminator (`keys[0]`) of an event.
    pub fn resolve(&self, discriminator: &str) -> EventKind {
        self.selectors.resolve(discriminator)
    }

    /// Decode `data` with the layout declared for `kind`.
    pub fn decode(&self, kind: &EventKind, data: &[String]) -> Result<GameEvent, DecodeError> {
        let parser = self
            .layouts
            .get(kind)
            .ok_or(DecodeError::PayloadMismatch("Unknown"))?;
        let value = parser.decode(data)?;
        GameEvent::from_decoded(kind, &value)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}
