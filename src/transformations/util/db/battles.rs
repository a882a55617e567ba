use crate::db::{document, Collection, DocValue, UpsertDescriptor};
use crate::decoding::BeastEncounter;
use crate::transformations::util::constants::{ATTACKER_ADVENTURER, ATTACKER_BEAST};
use crate::transformations::util::state_adventurer_id;

/// Who struck in a battle round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attacker {
    Adventurer,
    Beast,
}

impl Attacker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attacker::Adventurer => ATTACKER_ADVENTURER,
            Attacker::Beast => ATTACKER_BEAST,
        }
    }
}

/// Outcome of one battle round. Amounts that do not apply stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRound {
    pub attacker: Attacker,
    /// `None` unless the adventurer tried to flee
    pub fled: Option<bool>,
    pub damage_dealt: u16,
    pub critical_hit: bool,
    pub damage_taken: u16,
    /// Only set when the beast struck
    pub damage_location: Option<u8>,
    pub xp_earned_adventurer: u16,
    pub xp_earned_items: u16,
    pub gold_earned: u16,
}

impl BattleRound {
    pub fn new(attacker: Attacker) -> Self {
        Self {
            attacker,
            fled: None,
            damage_dealt: 0,
            critical_hit: false,
            damage_taken: 0,
            damage_location: None,
            xp_earned_adventurer: 0,
            xp_earned_items: 0,
            gold_earned: 0,
        }
    }
}

pub fn insert_battle(
    encounter: &BeastEncounter,
    round: &BattleRound,
    tx_hash: DocValue,
    timestamp: DocValue,
) -> UpsertDescriptor {
    let state = &encounter.adventurer_state;
    let spec = &encounter.beast_spec;

    UpsertDescriptor::insert(
        Collection::Battles,
        document([
            ("txHash", tx_hash),
            ("adventurerId", state_adventurer_id(state)),
            ("beast", DocValue::from(encounter.id)),
            ("seed", DocValue::numeric(encounter.seed)),
        ]),
        document([
            ("beastHealth", DocValue::from(state.adventurer.beast_health)),
            ("beastLevel", DocValue::from(spec.level)),
            ("special1", DocValue::from(spec.specials.special1)),
            ("special2", DocValue::from(spec.specials.special2)),
            ("special3", DocValue::from(spec.specials.special3)),
            ("adventurerHealth", DocValue::from(state.adventurer.health)),
            ("attacker", DocValue::from(round.attacker.as_str())),
            ("fled", DocValue::from(round.fled)),
            ("damageDealt", DocValue::from(round.damage_dealt)),
            ("criticalHit", DocValue::from(round.critical_hit)),
            ("damageTaken", DocValue::from(round.damage_taken)),
            ("damageLocation", DocValue::from(round.damage_location)),
            ("xpEarnedAdventurer", DocValue::from(round.xp_earned_adventurer)),
            ("xpEarnedItems", DocValue::from(round.xp_earned_items)),
            ("goldEarned", DocValue::from(round.gold_earned)),
            ("discoveryTime", timestamp.clone()),
            ("blockTime", timestamp.clone()),
            ("timestamp", timestamp),
        ]),
    )
}
