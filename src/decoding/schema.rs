//! Wire layouts of the game contract's structs and events.
//!
//! Field indices mirror the Cairo struct declarations; the record builder
//! sorts by index so the listing order below is free.

use super::event_parsing::EventKind;
use super::parser::Parser;

pub fn stats() -> Parser {
    Parser::record([
        ("strength", 0, Parser::U8),
        ("dexterity", 1, Parser::U8),
        ("vitality", 2, Parser::U8),
        ("intelligence", 3, Parser::U8),
        ("wisdom", 4, Parser::U8),
        ("charisma", 5, Parser::U8),
        ("luck", 6, Parser::U8),
    ])
}

pub fn loot_statistics() -> Parser {
    Parser::record([
        ("id", 0, Parser::U8),
        ("xp", 1, Parser::U16),
        ("metadata", 2, Parser::U8),
    ])
}

pub fn loot() -> Parser {
    Parser::record([
        ("id", 0, Parser::U8),
        ("tier", 1, Parser::U16),
        ("itemType", 2, Parser::U8),
        ("slot", 3, Parser::U8),
    ])
}

pub fn loot_with_price() -> Parser {
    Parser::record([("item", 0, loot()), ("price", 1, Parser::U16)])
}

/// Equipment slot names in wire order.
pub const EQUIPMENT_SLOTS: [&str; 8] = [
    "weapon", "chest", "head", "waist", "foot", "hand", "neck", "ring",
];

pub fn adventurer() -> Parser {
    let mut fields = vec![
        ("lastAction".to_string(), 0, Parser::U16),
        ("health".to_string(), 1, Parser::U16),
        ("xp".to_string(), 2, Parser::U16),
        ("stats".to_string(), 3, stats()),
        ("gold".to_string(), 4, Parser::U16),
        ("beastHealth".to_string(), 13, Parser::U16),
        ("statsPointsAvailable".to_string(), 14, Parser::U8),
        ("actionsPerBlock".to_string(), 15, Parser::U8),
        ("mutated".to_string(), 16, Parser::Bool),
    ];
    for (offset, slot) in EQUIPMENT_SLOTS.iter().enumerate() {
        fields.push((slot.to_string(), 5 + offset, loot_statistics()));
    }
    Parser::record(fields)
}

pub fn adventurer_state() -> Parser {
    Parser::record([
        ("owner", 0, Parser::Felt252),
        ("adventurerId", 1, Parser::Felt252),
        ("adventurer", 2, adventurer()),
    ])
}

pub fn adventurer_metadata() -> Parser {
    Parser::record([
        ("name", 0, Parser::U128),
        ("homeRealm", 1, Parser::U16),
        ("class", 2, Parser::U8),
        ("entropy", 3, Parser::U128),
    ])
}

/// Number of item slots in an adventurer's bag.
pub const BAG_SIZE: usize = 11;

pub fn bag() -> Parser {
    let mut fields: Vec<(String, usize, Parser)> = (0..BAG_SIZE)
        .map(|i| (format!("item{}", i + 1), i, loot_statistics()))
        .collect();
    fields.push(("mutated".to_string(), BAG_SIZE, Parser::Bool));
    Parser::record(fields)
}

pub fn adventurer_state_with_bag() -> Parser {
    Parser::record([
        ("adventurerState", 0, adventurer_state()),
        ("bag", 1, bag()),
    ])
}

pub fn special_powers() -> Parser {
    Parser::record([
        ("special1", 0, Parser::U8),
        ("special2", 1, Parser::U8),
        ("special3", 2, Parser::U8),
    ])
}

pub fn combat_spec() -> Parser {
    Parser::record([
        ("tier", 0, Parser::U8),
        ("itemType", 1, Parser::U8),
        ("level", 2, Parser::U16),
        ("specials", 3, special_powers()),
    ])
}

pub fn item_leveled_up() -> Parser {
    Parser::record([
        ("itemId", 0, Parser::U8),
        ("previousLevel", 1, Parser::U8),
        ("newLevel", 2, Parser::U8),
        ("suffixUnlocked", 3, Parser::Bool),
        ("prefixesUnlocked", 4, Parser::Bool),
        ("specials", 5, special_powers()),
    ])
}

pub fn player_reward() -> Parser {
    Parser::record([
        ("adventurerId", 0, Parser::Felt252),
        ("rank", 1, Parser::U8),
        ("amount", 2, Parser::U256),
        ("address", 3, Parser::Felt252),
    ])
}

pub fn client_reward() -> Parser {
    Parser::record([("amount", 0, Parser::U256), ("address", 1, Parser::Felt252)])
}

fn beast_encounter_fields() -> Vec<(&'static str, usize, Parser)> {
    vec![
        ("adventurerState", 0, adventurer_state()),
        ("seed", 1, Parser::U128),
        ("id", 2, Parser::U8),
        ("beastSpec", 3, combat_spec()),
    ]
}

fn discovered_amount() -> Parser {
    Parser::record([
        ("adventurerState", 0, adventurer_state()),
        ("amount", 1, Parser::U16),
    ])
}

fn obstacle() -> Parser {
    Parser::record([
        ("adventurerState", 0, adventurer_state()),
        ("id", 1, Parser::U8),
        ("level", 2, Parser::U8),
        ("damageTaken", 3, Parser::U16),
        ("damageLocation", 4, Parser::U8),
        ("xpEarnedAdventurer", 5, Parser::U16),
        ("xpEarnedItems", 6, Parser::U16),
    ])
}

fn beast_strike() -> Parser {
    let mut fields = beast_encounter_fields();
    fields.extend([
        ("damage", 4, Parser::U16),
        ("criticalHit", 5, Parser::Bool),
        ("location", 6, Parser::U8),
    ]);
    Parser::record(fields)
}

fn slayed_beast() -> Parser {
    let mut fields = beast_encounter_fields();
    fields.extend([
        ("damageDealt", 4, Parser::U16),
        ("criticalHit", 5, Parser::Bool),
        ("xpEarnedAdventurer", 6, Parser::U16),
        ("xpEarnedItems", 7, Parser::U16),
        ("goldEarned", 8, Parser::U16),
    ]);
    Parser::record(fields)
}

fn game_entropy_rotated() -> Parser {
    Parser::record([
        ("prevHash", 0, Parser::Felt252),
        ("prevBlockNumber", 1, Parser::U64),
        ("prevBlockTimestamp", 2, Parser::U64),
        ("prevNextRotationBlock", 3, Parser::U64),
        ("newHash", 4, Parser::Felt252),
        ("newBlockNumber", 5, Parser::U64),
        ("newBlockTimestamp", 6, Parser::U64),
        ("newNextRotationBlock", 7, Parser::U64),
        ("blocksPerHour", 8, Parser::U64),
    ])
}

/// Payload layout for an event kind. `None` for unknown kinds.
pub fn event_layout(kind: &EventKind) -> Option<Parser> {
    let parser = match kind {
        EventKind::StartGame => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("adventurerMeta", 1, adventurer_metadata()),
            ("revealBlock", 2, Parser::U64),
        ]),
        EventKind::AdventurerUpgraded => Parser::record([
            ("adventurerStateWithBag", 0, adventurer_state_with_bag()),
            ("strengthIncrease", 1, Parser::U8),
            ("dexterityIncrease", 2, Parser::U8),
            ("vitalityIncrease", 3, Parser::U8),
            ("intelligenceIncrease", 4, Parser::U8),
            ("wisdomIncrease", 5, Parser::U8),
            ("charismaIncrease", 6, Parser::U8),
        ]),
        EventKind::DiscoveredHealth | EventKind::DiscoveredGold | EventKind::DiscoveredXp => {
            discovered_amount()
        }
        EventKind::HitByObstacle | EventKind::DodgedObstacle => obstacle(),
        EventKind::DiscoveredBeast | EventKind::FleeFailed | EventKind::FleeSucceeded => {
            Parser::record(beast_encounter_fields())
        }
        EventKind::AmbushedByBeast | EventKind::AttackedBeast | EventKind::AttackedByBeast => {
            beast_strike()
        }
        EventKind::SlayedBeast => slayed_beast(),
        EventKind::AdventurerDied => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("killedByBeast", 1, Parser::U8),
            ("killedByObstacle", 2, Parser::U8),
            ("callerAddress", 3, Parser::Felt252),
        ]),
        EventKind::PurchasedPotions => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("quantity", 1, Parser::U8),
            ("cost", 2, Parser::U16),
            ("health", 3, Parser::U16),
        ]),
        EventKind::PurchasedItems => Parser::record([
            ("adventurerStateWithBag", 0, adventurer_state_with_bag()),
            ("purchases", 1, Parser::array(loot_with_price())),
        ]),
        EventKind::EquippedItems => Parser::record([
            ("adventurerStateWithBag", 0, adventurer_state_with_bag()),
            ("equippedItems", 1, Parser::array(Parser::U8)),
            ("unequippedItems", 2, Parser::array(Parser::U8)),
        ]),
        EventKind::DroppedItems => Parser::record([
            ("adventurerStateWithBag", 0, adventurer_state_with_bag()),
            ("itemIds", 1, Parser::array(Parser::U8)),
        ]),
        EventKind::UpgradesAvailable => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("items", 1, Parser::array(Parser::U8)),
        ]),
        EventKind::ItemsLeveledUp => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("items", 1, Parser::array(item_leveled_up())),
        ]),
        EventKind::NewHighScore => Parser::record([
            ("adventurerState", 0, adventurer_state()),
            ("rank", 1, Parser::U8),
        ]),
        EventKind::RewardDistribution => Parser::record([
            ("firstPlace", 0, player_reward()),
            ("secondPlace", 1, player_reward()),
            ("thirdPlace", 2, player_reward()),
            ("client", 3, client_reward()),
            ("dao", 4, Parser::U256),
        ]),
        EventKind::GameEntropyRotated => game_entropy_rotated(),
        EventKind::Unknown(_) => return None,
    };
    Some(parser)
}
