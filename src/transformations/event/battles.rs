use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::battles::{insert_battle, Attacker, BattleRound};

/// One document per battle round.
pub struct BattleHandler;

impl TransformationHandler for BattleHandler {
    fn name(&self) -> &'static str {
        "BattleHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Battles
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let (encounter, round) = match ctx.event {
            GameEvent::AttackedBeast(e) => (
                &e.encounter,
                BattleRound {
                    damage_dealt: e.damage,
                    critical_hit: e.critical_hit,
                    ..BattleRound::new(Attacker::Adventurer)
                },
            ),
            GameEvent::AttackedByBeast(e) | GameEvent::AmbushedByBeast(e) => (
                &e.encounter,
                BattleRound {
                    critical_hit: e.critical_hit,
                    damage_taken: e.damage,
                    damage_location: Some(e.location),
                    ..BattleRound::new(Attacker::Beast)
                },
            ),
            GameEvent::SlayedBeast(e) => (
                &e.encounter,
                BattleRound {
                    damage_dealt: e.damage_dealt,
                    critical_hit: e.critical_hit,
                    xp_earned_adventurer: e.xp_earned_adventurer,
                    xp_earned_items: e.xp_earned_items,
                    gold_earned: e.gold_earned,
                    ..BattleRound::new(Attacker::Adventurer)
                },
            ),
            GameEvent::FleeFailed(e) => (
                e,
                BattleRound {
                    fled: Some(false),
                    ..BattleRound::new(Attacker::Adventurer)
                },
            ),
            GameEvent::FleeSucceeded(e) => (
                e,
                BattleRound {
                    fled: Some(true),
                    ..BattleRound::new(Attacker::Adventurer)
                },
            ),
            _ => return Ok(Vec::new()),
        };

        Ok(vec![insert_battle(
            encounter,
            &round,
            ctx.tx_hash(),
            ctx.timestamp(),
        )])
    }
}

impl EventHandler for BattleHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![
            EventKind::AttackedBeast,
            EventKind::AttackedByBeast,
            EventKind::AmbushedByBeast,
            EventKind::SlayedBeast,
            EventKind::FleeFailed,
            EventKind::FleeSucceeded,
        ]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(BattleHandler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DocValue, WriteMode};
    use crate::decoding::test_support::{beast_encounter_wire, wire, AdventurerFixture};
    use crate::transformations::test_support::{decode, meta, slayed_beast_wire};

    fn battle(kind: EventKind, data: &[String]) -> UpsertDescriptor {
        let event = decode(&kind, data);
        let mut ops = BattleHandler
            .handle(&TransformationContext::new(&event, meta(Some("0xfeed"))))
            .unwrap();
        assert_eq!(ops.len(), 1);
        ops.remove(0)
    }

    #[test]
    fn test_slayed_beast_round() {
        let op = battle(
            EventKind::SlayedBeast,
            &slayed_beast_wire(&AdventurerFixture::default(), 50, 20, 5),
        );

        assert_eq!(op.mode, WriteMode::Insert);
        assert_eq!(op.field("attacker"), Some(&DocValue::Text("Adventurer".into())));
        assert_eq!(op.field("damageDealt"), Some(&DocValue::Uint64(50)));
        assert_eq!(op.field("damageTaken"), Some(&DocValue::Uint64(0)));
        assert_eq!(op.field("fled"), Some(&DocValue::Null));
        assert_eq!(op.field("xpEarnedAdventurer"), Some(&DocValue::Uint64(20)));
        assert_eq!(op.field("xpEarnedItems"), Some(&DocValue::Uint64(5)));
        assert_eq!(op.field("goldEarned"), Some(&DocValue::Uint64(4)));
        assert_eq!(op.field("damageLocation"), Some(&DocValue::Null));
        assert_eq!(op.field("seed"), Some(&DocValue::Numeric("77".into())));
        assert_eq!(op.field("txHash"), Some(&DocValue::Numeric("65261".into())));
    }

    #[test]
    fn test_beast_strike_round() {
        let mut data = beast_encounter_wire(&AdventurerFixture::default(), 77, 9, 3);
        data.extend(wire(&[12, 1, 4]));
        let op = battle(EventKind::AttackedByBeast, &data);

        assert_eq!(op.field("attacker"), Some(&DocValue::Text("Beast".into())));
        assert_eq!(op.field("damageTaken"), Some(&DocValue::Uint64(12)));
        assert_eq!(op.field("damageDealt"), Some(&DocValue::Uint64(0)));
        assert_eq!(op.field("criticalHit"), Some(&DocValue::Bool(true)));
        assert_eq!(op.field("damageLocation"), Some(&DocValue::Uint64(4)));
        assert_eq!(op.field("beastHealth"), Some(&DocValue::Uint64(3)));
    }

    #[test]
    fn test_flee_rounds() {
        let data = beast_encounter_wire(&AdventurerFixture::default(), 77, 9, 3);
        let failed = battle(EventKind::FleeFailed, &data);
        let succeeded = battle(EventKind::FleeSucceeded, &data);

        assert_eq!(failed.field("fled"), Some(&DocValue::Bool(false)));
        assert_eq!(succeeded.field("fled"), Some(&DocValue::Bool(true)));
        assert_eq!(succeeded.field("damageDealt"), Some(&DocValue::Uint64(0)));
    }
}
