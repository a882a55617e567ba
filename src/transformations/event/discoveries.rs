use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::constants::{
    SUB_DISCOVERY_GOLD, SUB_DISCOVERY_HEALTH, SUB_DISCOVERY_XP,
};
use crate::transformations::util::db::discoveries::{insert_discovery, Discovery};

/// Records what an adventurer found while exploring.
pub struct DiscoveryHandler;

impl TransformationHandler for DiscoveryHandler {
    fn name(&self) -> &'static str {
        "DiscoveryHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Discoveries
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let discovery = match ctx.event {
            GameEvent::DiscoveredHealth(e) => Discovery::item(SUB_DISCOVERY_HEALTH, e.amount),
            GameEvent::DiscoveredGold(e) => Discovery::item(SUB_DISCOVERY_GOLD, e.amount),
            GameEvent::DiscoveredXp(e) => Discovery::item(SUB_DISCOVERY_XP, e.amount),
            GameEvent::HitByObstacle(e) => Discovery::obstacle(e, false),
            GameEvent::DodgedObstacle(e) => Discovery::obstacle(e, true),
            GameEvent::DiscoveredBeast(e) => Discovery::beast(e, false),
            GameEvent::AmbushedByBeast(e) => Discovery {
                damage_taken: Some(e.damage),
                damage_location: Some(e.location),
                ..Discovery::beast(&e.encounter, true)
            },
            _ => return Ok(Vec::new()),
        };

        Ok(vec![insert_discovery(
            ctx.adventurer_state()?,
            &discovery,
            ctx.tx_hash(),
            ctx.timestamp(),
        )])
    }
}

impl EventHandler for DiscoveryHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![
            EventKind::DiscoveredHealth,
            EventKind::DiscoveredGold,
            EventKind::DiscoveredXp,
            EventKind::HitByObstacle,
            EventKind::DodgedObstacle,
            EventKind::DiscoveredBeast,
            EventKind::AmbushedByBeast,
        ]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(DiscoveryHandler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DocValue;
    use crate::decoding::test_support::{
        adventurer_state_wire, beast_encounter_wire, wire, AdventurerFixture,
    };
    use crate::transformations::test_support::{decode, meta, obstacle_wire};

    fn handle(kind: EventKind, data: &[String], tx: Option<&str>) -> UpsertDescriptor {
        let event = decode(&kind, data);
        let mut ops = DiscoveryHandler
            .handle(&TransformationContext::new(&event, meta(tx)))
            .unwrap();
        assert_eq!(ops.len(), 1);
        ops.remove(0)
    }

    #[test]
    fn test_gold_discovery() {
        let mut data = adventurer_state_wire(&AdventurerFixture::default());
        data.extend(wire(&[30]));
        let op = handle(EventKind::DiscoveredGold, &data, Some("0x2"));

        assert_eq!(op.field("discoveryType"), Some(&DocValue::Uint64(3)));
        assert_eq!(op.field("subDiscoveryType"), Some(&DocValue::Uint64(2)));
        assert_eq!(op.field("outputAmount"), Some(&DocValue::Uint64(30)));
        assert_eq!(op.field("obstacle"), Some(&DocValue::Null));
        assert_eq!(op.field("entity"), Some(&DocValue::Null));
    }

    #[test]
    fn test_dodged_obstacle() {
        let op = handle(
            EventKind::DodgedObstacle,
            &obstacle_wire(&AdventurerFixture::default(), 6, 0),
            Some("0x2"),
        );

        assert_eq!(op.field("discoveryType"), Some(&DocValue::Uint64(2)));
        assert_eq!(op.field("obstacle"), Some(&DocValue::Uint64(6)));
        assert_eq!(op.field("dodgedObstacle"), Some(&DocValue::Bool(true)));
        assert_eq!(op.field("damageTaken"), Some(&DocValue::Uint64(0)));
        assert_eq!(op.field("subDiscoveryType"), Some(&DocValue::Null));
    }

    #[test]
    fn test_ambush_records_beast_and_damage() {
        let fixture = AdventurerFixture {
            beast_health: 20,
            ..AdventurerFixture::default()
        };
        let mut data = beast_encounter_wire(&fixture, 77, 9, 3);
        data.extend(wire(&[12, 0, 4]));
        let op = handle(EventKind::AmbushedByBeast, &data, Some("0x2"));

        assert_eq!(op.field("discoveryType"), Some(&DocValue::Uint64(1)));
        assert_eq!(op.field("subDiscoveryType"), Some(&DocValue::Null));
        assert_eq!(op.field("outputAmount"), Some(&DocValue::Null));
        assert_eq!(op.field("obstacle"), Some(&DocValue::Null));
        assert_eq!(op.field("entity"), Some(&DocValue::Uint64(9)));
        assert_eq!(op.field("entityLevel"), Some(&DocValue::Uint64(3)));
        assert_eq!(op.field("entityHealth"), Some(&DocValue::Uint64(20)));
        assert_eq!(op.field("special1"), Some(&DocValue::Uint64(1)));
        assert_eq!(op.field("ambushed"), Some(&DocValue::Bool(true)));
        assert_eq!(op.field("damageTaken"), Some(&DocValue::Uint64(12)));
        assert_eq!(op.field("damageLocation"), Some(&DocValue::Uint64(4)));
        assert_eq!(op.field("seed"), Some(&DocValue::Numeric("77".into())));
    }

    #[test]
    fn test_missing_tx_hash_is_null() {
        let mut data = adventurer_state_wire(&AdventurerFixture::default());
        data.extend(wire(&[5]));
        let op = handle(EventKind::DiscoveredXp, &data, None);

        assert_eq!(op.key.get("txHash"), Some(&DocValue::Null));
        assert!(op.key_is_consistent());
    }
}
