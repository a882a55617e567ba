use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::entropy::insert_entropy;

/// Game entropy rotations.
pub struct EntropyHandler;

impl TransformationHandler for EntropyHandler {
    fn name(&self) -> &'static str {
        "EntropyHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Entropy
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        match ctx.event {
            GameEvent::GameEntropyRotated(e) => Ok(vec![insert_entropy(e, ctx.timestamp())]),
            _ => Ok(Vec::new()),
        }
    }
}

impl EventHandler for EntropyHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![EventKind::GameEntropyRotated]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(EntropyHandler);
}
