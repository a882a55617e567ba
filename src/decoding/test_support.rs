//! Wire builders for tests.

use super::event_parsing::{format_selector, selector_from_name, EventKind};

pub fn hex(value: u64) -> String {
    format!("{:#x}", value)
}

pub fn wire(values: &[u64]) -> Vec<String> {
    values.iter().map(|v| hex(*v)).collect()
}

/// Discriminator for a known kind, formatted as the block source emits it.
pub fn key_for(kind: &EventKind) -> String {
    format_selector(selector_from_name(kind.name()))
}

/// Adventurer snapshot used to build event payloads.
#[derive(Debug, Clone)]
pub struct AdventurerFixture {
    pub owner: u64,
    pub adventurer_id: u64,
    pub last_action: u16,
    pub health: u16,
    pub xp: u16,
    /// strength, dexterity, vitality, intelligence, wisdom, charisma, luck
    pub stats: [u8; 7],
    pub gold: u16,
    /// `(item id, xp)` per slot in wire order
    pub equipment: [(u8, u16); 8],
    pub beast_health: u16,
    pub stat_points: u8,
}

impl Default for AdventurerFixture {
    fn default() -> Self {
        let mut equipment = [(0, 0); 8];
        equipment[0] = (12, 0);
        Self {
            owner: 0xabc,
            adventurer_id: 7,
            last_action: 0,
            health: 100,
            xp: 0,
            stats: [0, 0, 0, 0, 0, 0, 1],
            gold: 25,
            equipment,
            beast_health: 3,
            stat_points: 0,
        }
    }
}

pub fn adventurer_wire(f: &AdventurerFixture) -> Vec<String> {
    let mut values: Vec<u64> = vec![f.last_action as u64, f.health as u64, f.xp as u64];
    values.extend(f.stats.iter().map(|s| *s as u64));
    values.push(f.gold as u64);
    for (id, xp) in f.equipment.iter() {
        values.extend([*id as u64, *xp as u64, 0]);
    }
    values.extend([f.beast_health as u64, f.stat_points as u64, 1, 0]);
    wire(&values)
}

pub fn adventurer_state_wire(f: &AdventurerFixture) -> Vec<String> {
    let mut data = wire(&[f.owner, f.adventurer_id]);
    data.extend(adventurer_wire(f));
    data
}

/// Empty bag: eleven zeroed slots plus the mutated flag.
pub fn bag_wire() -> Vec<String> {
    wire(&[0; 34])
}

/// tier, itemType, level, special1..3
pub fn combat_spec_wire(tier: u8, item_type: u8, level: u16) -> Vec<String> {
    wire(&[tier as u64, item_type as u64, level as u64, 1, 2, 3])
}

/// adventurerState, seed, beast id, combat spec.
pub fn beast_encounter_wire(f: &AdventurerFixture, seed: u64, beast: u8, level: u16) -> Vec<String> {
    let mut data = adventurer_state_wire(f);
    data.extend(wire(&[seed, beast as u64]));
    data.extend(combat_spec_wire(2, 1, level));
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoding::schema::{adventurer_state, bag};

    #[test]
    fn test_fixture_matches_layouts() {
        let data = adventurer_state_wire(&AdventurerFixture::default());
        assert_eq!(data.len(), adventurer_state().min_width());
        assert_eq!(bag_wire().len(), bag().min_width());
    }
}
