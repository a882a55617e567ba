//! Typed event payloads.
//!
//! A [`DecodedValue`] record is lifted into these structs once per event, so
//! handlers work with plain fields instead of string lookups.

use alloy_primitives::U256;

use super::error::DecodeError;
use super::event_parsing::EventKind;
use super::schema::{BAG_SIZE, EQUIPMENT_SLOTS};
use super::value::DecodedValue;

/// Conversion from a decoded record into a typed struct.
pub trait FromDecoded: Sized {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError>;
}

fn nested<T: FromDecoded>(value: &DecodedValue, name: &str) -> Result<T, DecodeError> {
    T::from_decoded(value.get(name)?)
}

fn list<T: FromDecoded>(value: &DecodedValue, name: &str) -> Result<Vec<T>, DecodeError> {
    value.get_array(name)?.iter().map(T::from_decoded).collect()
}

fn u8_list(value: &DecodedValue, name: &str) -> Result<Vec<u8>, DecodeError> {
    value
        .get_array(name)?
        .iter()
        .map(|v| v.as_u8().ok_or_else(|| DecodeError::type_mismatch(name, "u8")))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub strength: u8,
    pub dexterity: u8,
    pub vitality: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    pub luck: u8,
}

impl FromDecoded for Stats {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            strength: value.get_u8("strength")?,
            dexterity: value.get_u8("dexterity")?,
            vitality: value.get_u8("vitality")?,
            intelligence: value.get_u8("intelligence")?,
            wisdom: value.get_u8("wisdom")?,
            charisma: value.get_u8("charisma")?,
            luck: value.get_u8("luck")?,
        })
    }
}

/// An item as carried in an equipment slot or bag entry. Id 0 means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LootStatistics {
    pub id: u8,
    pub xp: u16,
    pub metadata: u8,
}

impl LootStatistics {
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

impl FromDecoded for LootStatistics {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            id: value.get_u8("id")?,
            xp: value.get_u16("xp")?,
            metadata: value.get_u8("metadata")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loot {
    pub id: u8,
    pub tier: u16,
    pub item_type: u8,
    pub slot: u8,
}

impl FromDecoded for Loot {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            id: value.get_u8("id")?,
            tier: value.get_u16("tier")?,
            item_type: value.get_u8("itemType")?,
            slot: value.get_u8("slot")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootWithPrice {
    pub item: Loot,
    pub price: u16,
}

impl FromDecoded for LootWithPrice {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            item: nested(value, "item")?,
            price: value.get_u16("price")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adventurer {
    pub last_action: u16,
    pub health: u16,
    pub xp: u16,
    pub stats: Stats,
    pub gold: u16,
    /// Slots in wire order: weapon, chest, head, waist, foot, hand, neck, ring.
    pub equipment: [LootStatistics; 8],
    pub beast_health: u16,
    pub stats_points_available: u8,
    pub actions_per_block: u8,
    pub mutated: bool,
}

impl Adventurer {
    pub fn weapon(&self) -> &LootStatistics {
        &self.equipment[0]
    }

    /// `(slot name, item)` pairs in wire order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, &LootStatistics)> {
        EQUIPMENT_SLOTS.iter().copied().zip(self.equipment.iter())
    }
}

impl FromDecoded for Adventurer {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        let mut equipment = [LootStatistics::default(); 8];
        for (slot, item) in EQUIPMENT_SLOTS.iter().zip(equipment.iter_mut()) {
            *item = nested(value, slot)?;
        }
        Ok(Self {
            last_action: value.get_u16("lastAction")?,
            health: value.get_u16("health")?,
            xp: value.get_u16("xp")?,
            stats: nested(value, "stats")?,
            gold: value.get_u16("gold")?,
            equipment,
            beast_health: value.get_u16("beastHealth")?,
            stats_points_available: value.get_u8("statsPointsAvailable")?,
            actions_per_block: value.get_u8("actionsPerBlock")?,
            mutated: value.get_bool("mutated")?,
        })
    }
}

/// Snapshot of an adventurer after the action that emitted the event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdventurerState {
    pub owner: U256,
    pub adventurer_id: U256,
    pub adventurer: Adventurer,
}

impl FromDecoded for AdventurerState {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            owner: value.get_felt("owner")?,
            adventurer_id: value.get_felt("adventurerId")?,
            adventurer: nested(value, "adventurer")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdventurerMetadata {
    pub name: u128,
    pub home_realm: u16,
    pub class: u8,
    pub entropy: u128,
}

impl FromDecoded for AdventurerMetadata {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            name: value.get_u128("name")?,
            home_realm: value.get_u16("homeRealm")?,
            class: value.get_u8("class")?,
            entropy: value.get_u128("entropy")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    pub items: [LootStatistics; BAG_SIZE],
    pub mutated: bool,
}

impl FromDecoded for Bag {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        let mut items = [LootStatistics::default(); BAG_SIZE];
        for (i, item) in items.iter_mut().enumerate() {
            *item = nested(value, &format!("item{}", i + 1))?;
        }
        Ok(Self {
            items,
            mutated: value.get_bool("mutated")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventurerStateWithBag {
    pub adventurer_state: AdventurerState,
    pub bag: Bag,
}

impl FromDecoded for AdventurerStateWithBag {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            adventurer_state: nested(value, "adventurerState")?,
            bag: nested(value, "bag")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecialPowers {
    pub special1: u8,
    pub special2: u8,
    pub special3: u8,
}

impl FromDecoded for SpecialPowers {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            special1: value.get_u8("special1")?,
            special2: value.get_u8("special2")?,
            special3: value.get_u8("special3")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatSpec {
    pub tier: u8,
    pub item_type: u8,
    pub level: u16,
    pub specials: SpecialPowers,
}

impl FromDecoded for CombatSpec {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            tier: value.get_u8("tier")?,
            item_type: value.get_u8("itemType")?,
            level: value.get_u16("level")?,
            specials: nested(value, "specials")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLeveledUp {
    pub item_id: u8,
    pub previous_level: u8,
    pub new_level: u8,
    pub suffix_unlocked: bool,
    pub prefixes_unlocked: bool,
    pub specials: SpecialPowers,
}

impl FromDecoded for ItemLeveledUp {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            item_id: value.get_u8("itemId")?,
            previous_level: value.get_u8("previousLevel")?,
            new_level: value.get_u8("newLevel")?,
            suffix_unlocked: value.get_bool("suffixUnlocked")?,
            prefixes_unlocked: value.get_bool("prefixesUnlocked")?,
            specials: nested(value, "specials")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerReward {
    pub adventurer_id: U256,
    pub rank: u8,
    pub amount: U256,
    pub address: U256,
}

impl FromDecoded for PlayerReward {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            adventurer_id: value.get_felt("adventurerId")?,
            rank: value.get_u8("rank")?,
            amount: value.get_uint256("amount")?,
            address: value.get_felt("address")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientReward {
    pub amount: U256,
    pub address: U256,
}

impl FromDecoded for ClientReward {
    fn from_decoded(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            amount: value.get_uint256("amount")?,
            address: value.get_felt("address")?,
        })
    }
}

// Event payloads

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartGame {
    pub adventurer_state: AdventurerState,
    pub adventurer_meta: AdventurerMetadata,
    pub reveal_block: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventurerUpgraded {
    pub adventurer_state_with_bag: AdventurerStateWithBag,
    /// strength, dexterity, vitality, intelligence, wisdom, charisma
    pub increases: [u8; 6],
}

/// Health, gold or XP found while exploring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAmount {
    pub adventurer_state: AdventurerState,
    pub amount: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleEncounter {
    pub adventurer_state: AdventurerState,
    pub id: u8,
    pub level: u8,
    pub damage_taken: u16,
    pub damage_location: u8,
    pub xp_earned_adventurer: u16,
    pub xp_earned_items: u16,
}

/// Beast identity shared by every beast event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeastEncounter {
    pub adventurer_state: AdventurerState,
    pub seed: u128,
    pub id: u8,
    pub beast_spec: CombatSpec,
}

impl BeastEncounter {
    fn decode(value: &DecodedValue) -> Result<Self, DecodeError> {
        Ok(Self {
            adventurer_state: nested(value, "adventurerState")?,
            seed: value.get_u128("seed")?,
            id: value.get_u8("id")?,
            beast_spec: nested(value, "beastSpec")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeastStrike {
    pub encounter: BeastEncounter,
    pub damage: u16,
    pub critical_hit: bool,
    pub location: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlayedBeast {
    pub encounter: BeastEncounter,
    pub damage_dealt: u16,
    pub critical_hit: bool,
    pub xp_earned_adventurer: u16,
    pub xp_earned_items: u16,
    pub gold_earned: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventurerDied {
    pub adventurer_state: AdventurerState,
    pub killed_by_beast: u8,
    pub killed_by_obstacle: u8,
    pub caller_address: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasedPotions {
    pub adventurer_state: AdventurerState,
    pub quantity: u8,
    pub cost: u16,
    pub health: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasedItems {
    pub adventurer_state_with_bag: AdventurerStateWithBag,
    pub purchases: Vec<LootWithPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquippedItems {
    pub adventurer_state_with_bag: AdventurerStateWithBag,
    pub equipped_items: Vec<u8>,
    pub unequipped_items: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedItems {
    pub adventurer_state_with_bag: AdventurerStateWithBag,
    pub item_ids: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradesAvailable {
    pub adventurer_state: AdventurerState,
    pub items: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsLeveledUp {
    pub adventurer_state: AdventurerState,
    pub items: Vec<ItemLeveledUp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHighScore {
    pub adventurer_state: AdventurerState,
    pub rank: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardDistribution {
    pub first_place: PlayerReward,
    pub second_place: PlayerReward,
    pub third_place: PlayerReward,
    pub client: ClientReward,
    pub dao: U256,
}

impl RewardDistribution {
    pub fn places(&self) -> [&PlayerReward; 3] {
        [&self.first_place, &self.second_place, &self.third_place]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntropyRotated {
    pub prev_hash: U256,
    pub prev_block_number: u64,
    pub prev_block_timestamp: u64,
    pub prev_next_rotation_block: u64,
    pub new_hash: U256,
    pub new_block_number: u64,
    pub new_block_timestamp: u64,
    pub new_next_rotation_block: u64,
    pub blocks_per_hour: u64,
}

/// A fully decoded game event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StartGame(StartGame),
    AdventurerUpgraded(AdventurerUpgraded),
    DiscoveredHealth(DiscoveredAmount),
    DiscoveredGold(DiscoveredAmount),
    DiscoveredXp(DiscoveredAmount),
    HitByObstacle(ObstacleEncounter),
    DodgedObstacle(ObstacleEncounter),
    DiscoveredBeast(BeastEncounter),
    AmbushedByBeast(BeastStrike),
    AttackedBeast(BeastStrike),
    AttackedByBeast(BeastStrike),
    SlayedBeast(SlayedBeast),
    AdventurerDied(AdventurerDied),
    FleeFailed(BeastEncounter),
    FleeSucceeded(BeastEncounter),
    PurchasedPotions(PurchasedPotions),
    PurchasedItems(PurchasedItems),
    EquippedItems(EquippedItems),
    DroppedItems(DroppedItems),
    UpgradesAvailable(UpgradesAvailable),
    ItemsLeveledUp(ItemsLeveledUp),
    NewHighScore(NewHighScore),
    RewardDistribution(RewardDistribution),
    GameEntropyRotated(GameEntropyRotated),
}

impl GameEvent {
    /// Lift a decoded payload into the typed event for `kind`.
    pub fn from_decoded(kind: &EventKind, value: &DecodedValue) -> Result<Self, DecodeError> {
        let event = match kind {
            EventKind::StartGame => GameEvent::StartGame(StartGame {
                adventurer_state: nested(value, "adventurerState")?,
                adventurer_meta: nested(value, "adventurerMeta")?,
                reveal_block: value.get_u64("revealBlock")?,
            }),
            EventKind::AdventurerUpgraded => GameEvent::AdventurerUpgraded(AdventurerUpgraded {
                adventurer_state_with_bag: nested(value, "adventurerStateWithBag")?,
                increases: [
                    value.get_u8("strengthIncrease")?,
                    value.get_u8("dexterityIncrease")?,
                    value.get_u8("vitalityIncrease")?,
                    value.get_u8("intelligenceIncrease")?,
                    value.get_u8("wisdomIncrease")?,
                    value.get_u8("charismaIncrease")?,
                ],
            }),
            EventKind::DiscoveredHealth => GameEvent::DiscoveredHealth(discovered(value)?),
            EventKind::DiscoveredGold => GameEvent::DiscoveredGold(discovered(value)?),
            EventKind::DiscoveredXp => GameEvent::DiscoveredXp(discovered(value)?),
            EventKind::HitByObstacle => GameEvent::HitByObstacle(obstacle(value)?),
            EventKind::DodgedObstacle => GameEvent::DodgedObstacle(obstacle(value)?),
            EventKind::DiscoveredBeast => GameEvent::DiscoveredBeast(BeastEncounter::decode(value)?),
            EventKind::FleeFailed => GameEvent::FleeFailed(BeastEncounter::decode(value)?),
            EventKind::FleeSucceeded => GameEvent::FleeSucceeded(BeastEncounter::decode(value)?),
            EventKind::AmbushedByBeast => GameEvent::AmbushedByBeast(strike(value)?),
            EventKind::AttackedBeast => GameEvent::AttackedBeast(strike(value)?),
            EventKind::AttackedByBeast => GameEvent::AttackedByBeast(strike(value)?),
            EventKind::SlayedBeast => GameEvent::SlayedBeast(SlayedBeast {
                encounter: BeastEncounter::decode(value)?,
                damage_dealt: value.get_u16("damageDealt")?,
                critical_hit: value.get_bool("criticalHit")?,
                xp_earned_adventurer: value.get_u16("xpEarnedAdventurer")?,
                xp_earned_items: value.get_u16("xpEarnedItems")?,
                gold_earned: value.get_u16("goldEarned")?,
            }),
            EventKind::AdventurerDied => GameEvent::AdventurerDied(AdventurerDied {
                adventurer_state: nested(value, "adventurerState")?,
                killed_by_beast: value.get_u8("killedByBeast")?,
                killed_by_obstacle: value.get_u8("killedByObstacle")?,
                caller_address: value.get_felt("callerAddress")?,
            }),
            EventKind::PurchasedPotions => GameEvent::PurchasedPotions(PurchasedPotions {
                adventurer_state: nested(value, "adventurerState")?,
                quantity: value.get_u8("quantity")?,
                cost: value.get_u16("cost")?,
                health: value.get_u16("health")?,
            }),
            EventKind::PurchasedItems => GameEvent::PurchasedItems(PurchasedItems {
                adventurer_state_with_bag: nested(value, "adventurerStateWithBag")?,
                purchases: list(value, "purchases")?,
            }),
            EventKind::EquippedItems => GameEvent::EquippedItems(EquippedItems {
                adventurer_state_with_bag: nested(value, "adventurerStateWithBag")?,
                equipped_items: u8_list(value, "equippedItems")?,
                unequipped_items: u8_list(value, "unequippedItems")?,
            }),
            EventKind::DroppedItems => GameEvent::DroppedItems(DroppedItems {
                adventurer_state_with_bag: nested(value, "adventurerStateWithBag")?,
                item_ids: u8_list(value, "itemIds")?,
            }),
            EventKind::UpgradesAvailable => GameEvent::UpgradesAvailable(UpgradesAvailable {
                adventurer_state: nested(value, "adventurerState")?,
                items: u8_list(value, "items")?,
            }),
            EventKind::ItemsLeveledUp => GameEvent::ItemsLeveledUp(ItemsLeveledUp {
                adventurer_state: nested(value, "adventurerState")?,
                items: list(value, "items")?,
            }),
            EventKind::NewHighScore => GameEvent::NewHighScore(NewHighScore {
                adventurer_state: nested(value, "adventurerState")?,
                rank: value.get_u8("rank")?,
            }),
            EventKind::RewardDistribution => GameEvent::RewardDistribution(RewardDistribution {
                first_place: nested(value, "firstPlace")?,
                second_place: nested(value, "secondPlace")?,
                third_place: nested(value, "thirdPlace")?,
                client: nested(value, "client")?,
                dao: value.get_uint256("dao")?,
            }),
            EventKind::GameEntropyRotated => GameEvent::GameEntropyRotated(GameEntropyRotated {
                prev_hash: value.get_felt("prevHash")?,
                prev_block_number: value.get_u64("prevBlockNumber")?,
                prev_block_timestamp: value.get_u64("prevBlockTimestamp")?,
                prev_next_rotation_block: value.get_u64("prevNextRotationBlock")?,
                new_hash: value.get_felt("newHash")?,
                new_block_number: value.get_u64("newBlockNumber")?,
                new_block_timestamp: value.get_u64("newBlockTimestamp")?,
                new_next_rotation_block: value.get_u64("newNextRotationBlock")?,
                blocks_per_hour: value.get_u64("blocksPerHour")?,
            }),
            EventKind::Unknown(_) => return Err(DecodeError::PayloadMismatch("Unknown")),
        };
        Ok(event)
    }

    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::StartGame(_) => EventKind::StartGame,
            GameEvent::AdventurerUpgraded(_) => EventKind::AdventurerUpgraded,
            GameEvent::DiscoveredHealth(_) => EventKind::DiscoveredHealth,
            GameEvent::DiscoveredGold(_) => EventKind::DiscoveredGold,
            GameEvent::DiscoveredXp(_) => EventKind::DiscoveredXp,
            GameEvent::HitByObstacle(_) => EventKind::HitByObstacle,
            GameEvent::DodgedObstacle(_) => EventKind::DodgedObstacle,
            GameEvent::DiscoveredBeast(_) => EventKind::DiscoveredBeast,
            GameEvent::AmbushedByBeast(_) => EventKind::AmbushedByBeast,
            GameEvent::AttackedBeast(_) => EventKind::AttackedBeast,
            GameEvent::AttackedByBeast(_) => EventKind::AttackedByBeast,
            GameEvent::SlayedBeast(_) => EventKind::SlayedBeast,
            GameEvent::AdventurerDied(_) => EventKind::AdventurerDied,
            GameEvent::FleeFailed(_) => EventKind::FleeFailed,
            GameEvent::FleeSucceeded(_) => EventKind::FleeSucceeded,
            GameEvent::PurchasedPotions(_) => EventKind::PurchasedPotions,
            GameEvent::PurchasedItems(_) => EventKind::PurchasedItems,
            GameEvent::EquippedItems(_) => EventKind::EquippedItems,
            GameEvent::DroppedItems(_) => EventKind::DroppedItems,
            GameEvent::UpgradesAvailable(_) => EventKind::UpgradesAvailable,
            GameEvent::ItemsLeveledUp(_) => EventKind::ItemsLeveledUp,
            GameEvent::NewHighScore(_) => EventKind::NewHighScore,
            GameEvent::RewardDistribution(_) => EventKind::RewardDistribution,
            GameEvent::GameEntropyRotated(_) => EventKind::GameEntropyRotated,
        }
    }

    /// The adventurer snapshot carried by the event, if it has one.
    pub fn adventurer_state(&self) -> Option<&AdventurerState> {
        match self {
            GameEvent::StartGame(e) => Some(&e.adventurer_state),
            GameEvent::AdventurerUpgraded(e) => Some(&e.adventurer_state_with_bag.adventurer_state),
            GameEvent::DiscoveredHealth(e)
            | GameEvent::DiscoveredGold(e)
            | GameEvent::DiscoveredXp(e) => Some(&e.adventurer_state),
            GameEvent::HitByObstacle(e) | GameEvent::DodgedObstacle(e) => Some(&e.adventurer_state),
            GameEvent::DiscoveredBeast(e) | GameEvent::FleeFailed(e) | GameEvent::FleeSucceeded(e) => {
                Some(&e.adventurer_state)
            }
            GameEvent::AmbushedByBeast(e)
            | GameEvent::AttackedBeast(e)
            | GameEvent::AttackedByBeast(e) => Some(&e.encounter.adventurer_state),
            GameEvent::SlayedBeast(e) => Some(&e.encounter.adventurer_state),
            GameEvent::AdventurerDied(e) => Some(&e.adventurer_state),
            GameEvent::PurchasedPotions(e) => Some(&e.adventurer_state),
            GameEvent::PurchasedItems(e) => Some(&e.adventurer_state_with_bag.adventurer_state),
            GameEvent::EquippedItems(e) => Some(&e.adventurer_state_with_bag.adventurer_state),
            GameEvent::DroppedItems(e) => Some(&e.adventurer_state_with_bag.adventurer_state),
            GameEvent::UpgradesAvailable(e) => Some(&e.adventurer_state),
            GameEvent::ItemsLeveledUp(e) => Some(&e.adventurer_state),
            GameEvent::NewHighScore(e) => Some(&e.adventurer_state),
            GameEvent::RewardDistribution(_) | GameEvent::GameEntropyRotated(_) => None,
        }
    }
}

fn discovered(value: &DecodedValue) -> Result<DiscoveredAmount, DecodeError> {
    Ok(DiscoveredAmount {
        adventurer_state: nested(value, "adventurerState")?,
        amount: value.get_u16("amount")?,
    })
}

fn obstacle(value: &DecodedValue) -> Result<ObstacleEncounter, DecodeError> {
    Ok(ObstacleEncounter {
        adventurer_state: nested(value, "adventurerState")?,
        id: value.get_u8("id")?,
        level: value.get_u8("level")?,
        damage_taken: value.get_u16("damageTaken")?,
        damage_location: value.get_u8("damageLocation")?,
        xp_earned_adventurer: value.get_u16("xpEarnedAdventurer")?,
        xp_earned_items: value.get_u16("xpEarnedItems")?,
    })
}

fn strike(value: &DecodedValue) -> Result<BeastStrike, DecodeError> {
    Ok(BeastStrike {
        encounter: BeastEncounter::decode(value)?,
        damage: value.get_u16("damage")?,
        critical_hit: value.get_bool("criticalHit")?,
        location: value.get_u8("location")?,
    })
}
