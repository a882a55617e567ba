use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::beasts::{insert_beast, update_beast_health};

/// Tracks each beast an adventurer meets until it is slain.
pub struct BeastHandler;

impl TransformationHandler for BeastHandler {
    fn name(&self) -> &'static str {
        "BeastHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Beasts
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let op = match ctx.event {
            GameEvent::DiscoveredBeast(e) => insert_beast(e, ctx.timestamp()),
            GameEvent::AmbushedByBeast(e) => insert_beast(&e.encounter, ctx.timestamp()),
            GameEvent::AttackedBeast(e) => update_beast_health(&e.encounter, false, ctx.timestamp()),
            GameEvent::SlayedBeast(e) => update_beast_health(&e.encounter, true, ctx.timestamp()),
            _ => return Ok(Vec::new()),
        };
        Ok(vec![op])
    }
}

impl EventHandler for BeastHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![
            EventKind::DiscoveredBeast,
            EventKind::AmbushedByBeast,
            EventKind::AttackedBeast,
            EventKind::SlayedBeast,
        ]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(BeastHandler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{document, DocValue, WriteMode};
    use crate::decoding::test_support::{beast_encounter_wire, wire, AdventurerFixture};
    use crate::transformations::test_support::{decode, meta, slayed_beast_wire};

    fn handle(kind: EventKind, data: &[String]) -> UpsertDescriptor {
        let event = decode(&kind, data);
        let mut ops = BeastHandler
            .handle(&TransformationContext::new(&event, meta(None)))
            .unwrap();
        assert_eq!(ops.len(), 1);
        ops.remove(0)
    }

    #[test]
    fn test_discovered_beast_uses_beast_health() {
        let fixture = AdventurerFixture {
            health: 90,
            beast_health: 15,
            ..AdventurerFixture::default()
        };
        let op = handle(
            EventKind::DiscoveredBeast,
            &beast_encounter_wire(&fixture, 77, 9, 3),
        );

        assert_eq!(op.mode, WriteMode::Insert);
        assert_eq!(op.field("health"), Some(&DocValue::Uint64(15)));
        assert_eq!(op.field("level"), Some(&DocValue::Uint64(3)));
        assert_eq!(op.field("slain"), Some(&DocValue::Bool(false)));
        assert_eq!(op.field("slainOnTime"), Some(&DocValue::Null));
        assert_eq!(op.field("special3"), Some(&DocValue::Uint64(3)));
    }

    #[test]
    fn test_ambushed_beast_inserts_beast() {
        let fixture = AdventurerFixture {
            beast_health: 20,
            ..AdventurerFixture::default()
        };
        let mut data = beast_encounter_wire(&fixture, 77, 9, 3);
        data.extend(wire(&[12, 1, 4]));
        let op = handle(EventKind::AmbushedByBeast, &data);

        assert_eq!(op.mode, WriteMode::Insert);
        assert_eq!(
            op.key,
            document([
                ("beast", DocValue::Uint64(9)),
                ("adventurerId", DocValue::Numeric("7".into())),
                ("seed", DocValue::Numeric("77".into())),
            ])
        );
        assert_eq!(op.field("health"), Some(&DocValue::Uint64(20)));
        assert_eq!(op.field("level"), Some(&DocValue::Uint64(3)));
        assert_eq!(op.field("slain"), Some(&DocValue::Bool(false)));
        assert_eq!(op.field("createdTime"), Some(&DocValue::Timestamp(1_700_000_000)));
    }

    #[test]
    fn test_attack_updates_health_without_slaying() {
        let mut data = beast_encounter_wire(&AdventurerFixture::default(), 77, 9, 3);
        data.extend(wire(&[2, 0, 0]));
        let op = handle(EventKind::AttackedBeast, &data);

        assert_eq!(op.mode, WriteMode::Update);
        assert_eq!(op.field("health"), Some(&DocValue::Uint64(3)));
        assert!(op.field("slain").is_none());
        assert!(op.field("slainOnTime").is_none());
    }

    #[test]
    fn test_slayed_beast_sets_slain() {
        let fixture = AdventurerFixture {
            beast_health: 0,
            ..AdventurerFixture::default()
        };
        let op = handle(EventKind::SlayedBeast, &slayed_beast_wire(&fixture, 50, 20, 5));

        assert_eq!(op.field("health"), Some(&DocValue::Uint64(0)));
        assert_eq!(op.field("slain"), Some(&DocValue::Bool(true)));
        assert_eq!(op.field("slainOnTime"), Some(&DocValue::Timestamp(1_700_000_000)));
    }
}
