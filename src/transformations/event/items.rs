use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::items::{
    drop_item, equip_starter_weapon, insert_all_items, purchase_item, reset_availability,
    set_available, set_equipped, update_equipped_xp, update_specials,
};

/// Ownership, equipment, xp and specials of every item per adventurer.
pub struct ItemHandler;

impl TransformationHandler for ItemHandler {
    fn name(&self) -> &'static str {
        "ItemHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Items
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let ts = ctx.timestamp();

        let ops = match ctx.event {
            GameEvent::StartGame(e) => {
                let state = &e.adventurer_state;
                let mut ops = insert_all_items(state, ts.clone());
                ops.push(equip_starter_weapon(state, ts));
                ops
            }
            GameEvent::PurchasedItems(e) => {
                let state = &e.adventurer_state_with_bag.adventurer_state;
                e.purchases
                    .iter()
                    .map(|purchase| purchase_item(purchase.item.id, state, ts.clone()))
                    .collect()
            }
            GameEvent::EquippedItems(e) => {
                let state = &e.adventurer_state_with_bag.adventurer_state;
                let equipped = e
                    .equipped_items
                    .iter()
                    .map(|item| set_equipped(*item, true, state, ts.clone()));
                let unequipped = e
                    .unequipped_items
                    .iter()
                    .map(|item| set_equipped(*item, false, state, ts.clone()));
                equipped.chain(unequipped).collect()
            }
            GameEvent::DroppedItems(e) => {
                let state = &e.adventurer_state_with_bag.adventurer_state;
                e.item_ids
                    .iter()
                    .map(|item| drop_item(*item, state, ts.clone()))
                    .collect()
            }
            GameEvent::HitByObstacle(e) | GameEvent::DodgedObstacle(e) => {
                update_equipped_xp(&e.adventurer_state, ts)
            }
            GameEvent::SlayedBeast(e) => update_equipped_xp(&e.encounter.adventurer_state, ts),
            GameEvent::ItemsLeveledUp(e) => e
                .items
                .iter()
                .filter_map(|item| update_specials(item, &e.adventurer_state, ts.clone()))
                .collect(),
            GameEvent::UpgradesAvailable(e) => e
                .items
                .iter()
                .map(|item| set_available(*item, true, &e.adventurer_state, ts.clone()))
                .collect(),
            GameEvent::AdventurerUpgraded(e) => {
                reset_availability(&e.adventurer_state_with_bag.adventurer_state, ts)
            }
            _ => Vec::new(),
        };

        Ok(ops)
    }
}

impl EventHandler for ItemHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![
            EventKind::StartGame,
            EventKind::PurchasedItems,
            EventKind::EquippedItems,
            EventKind::DroppedItems,
            EventKind::HitByObstacle,
            EventKind::DodgedObstacle,
            EventKind::SlayedBeast,
            EventKind::ItemsLeveledUp,
            EventKind::UpgradesAvailable,
            EventKind::AdventurerUpgraded,
        ]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(ItemHandler);
}
