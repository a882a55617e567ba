//! Event fixtures for handler and engine tests.

use crate::decoding::test_support::{
    adventurer_state_wire, bag_wire, beast_encounter_wire, wire, AdventurerFixture,
};
use crate::decoding::{EventCatalog, EventKind, GameEvent};

use super::context::EventMeta;

pub const BLOCK_NUMBER: u64 = 631_000;
pub const BLOCK_TIMESTAMP: u64 = 1_700_000_000;

pub fn meta(transaction_hash: Option<&str>) -> EventMeta<'_> {
    EventMeta {
        block_number: BLOCK_NUMBER,
        block_timestamp: BLOCK_TIMESTAMP,
        transaction_hash,
        event_index: 0,
    }
}

pub fn decode(kind: &EventKind, data: &[String]) -> GameEvent {
    EventCatalog::new().decode(kind, data).unwrap()
}

/// StartGame with name "TheR", realm 4, class 1, reveal block 99.
pub fn start_game_wire(f: &AdventurerFixture) -> Vec<String> {
    let mut data = adventurer_state_wire(f);
    data.extend(wire(&[0x5468_6552, 4, 1, 0x1234, 99]));
    data
}

/// One potion for 2 gold, healing 10.
pub fn potions_wire(f: &AdventurerFixture) -> Vec<String> {
    let mut data = adventurer_state_wire(f);
    data.extend(wire(&[1, 2, 10]));
    data
}

/// Obstacle 6 at level 1 in the hand slot, 3 adventurer xp, 1 item xp.
pub fn obstacle_wire(f: &AdventurerFixture, id: u8, damage: u16) -> Vec<String> {
    let mut data = adventurer_state_wire(f);
    data.extend(wire(&[id as u64, 1, damage as u64, 6, 3, 1]));
    data
}

/// Beast 9 at level 3 with seed 77, no critical hit, 4 gold earned.
pub fn slayed_beast_wire(
    f: &AdventurerFixture,
    damage_dealt: u16,
    xp_adventurer: u16,
    xp_items: u16,
) -> Vec<String> {
    let mut data = beast_encounter_wire(f, 77, 9, 3);
    data.extend(wire(&[
        damage_dealt as u64,
        0,
        xp_adventurer as u64,
        xp_items as u64,
        4,
    ]));
    data
}

pub fn equipped_items_wire(f: &AdventurerFixture, equipped: &[u8], unequipped: &[u8]) -> Vec<String> {
    let mut data = adventurer_state_wire(f);
    data.extend(bag_wire());
    for items in [equipped, unequipped] {
        data.extend(wire(&[items.len() as u64]));
        data.extend(wire(&items.iter().map(|i| *i as u64).collect::<Vec<_>>()));
    }
    data
}

/// Places 1 to 3 go to adventurers 1 to 3 owned by 0xa1 to 0xa3.
pub fn reward_distribution_wire(amounts: [u64; 3]) -> Vec<String> {
    let mut data = Vec::new();
    for (i, amount) in amounts.iter().enumerate() {
        let place = i as u64 + 1;
        data.extend(wire(&[place, place, *amount, 0, 0xa0 + place]));
    }
    // client amount and address, then the dao share
    data.extend(wire(&[50, 0, 0xc1, 25, 0]));
    data
}
