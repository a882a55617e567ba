use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::adventurers::{insert_adventurer, update_adventurer};

/// Keeps one document per adventurer in sync with the latest snapshot.
pub struct AdventurerHandler;

impl TransformationHandler for AdventurerHandler {
    fn name(&self) -> &'static str {
        "AdventurerHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Adventurers
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let op = match ctx.event {
            GameEvent::StartGame(event) => insert_adventurer(event, ctx.timestamp()),
            _ => update_adventurer(ctx.adventurer_state()?, ctx.timestamp()),
        };
        Ok(vec![op])
    }
}

impl EventHandler for AdventurerHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![
            EventKind::StartGame,
            EventKind::AdventurerUpgraded,
            EventKind::DiscoveredHealth,
            EventKind::DiscoveredGold,
            EventKind::DiscoveredXp,
            EventKind::HitByObstacle,
            EventKind::DodgedObstacle,
            EventKind::DiscoveredBeast,
            EventKind::AmbushedByBeast,
            EventKind::AttackedBeast,
            EventKind::AttackedByBeast,
            EventKind::SlayedBeast,
            EventKind::AdventurerDied,
            EventKind::FleeFailed,
            EventKind::FleeSucceeded,
            EventKind::PurchasedPotions,
            EventKind::PurchasedItems,
            EventKind::EquippedItems,
            EventKind::DroppedItems,
            EventKind::UpgradesAvailable,
            EventKind::ItemsLeveledUp,
            EventKind::NewHighScore,
        ]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(AdventurerHandler);
}
