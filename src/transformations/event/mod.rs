//! Event handlers, one per collection.
//!
//! Registration order is the order their batches are concatenated in.

pub mod adventurers;
pub mod battles;
pub mod beasts;
pub mod discoveries;
pub mod entropy;
pub mod items;
pub mod scores;

use super::registry::TransformationRegistry;

/// Register all event handlers with the registry.
pub fn register_handlers(registry: &mut TransformationRegistry) {
    adventurers::register_handlers(registry);
    battles::register_handlers(registry);
    beasts::register_handlers(registry);
    discoveries::register_handlers(registry);
    items::register_handlers(registry);
    scores::register_handlers(registry);
    entropy::register_handlers(registry);
}
