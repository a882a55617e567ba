//! Event discriminators.
//!
//! An event's first key is the Starknet selector of its name:
//! `keccak256(name)` truncated to 250 bits.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::{keccak256, U256};

const SELECTOR_BITS: usize = 250;

/// Compute the Starknet selector for an event or function name.
pub fn selector_from_name(name: &str) -> U256 {
    let hash = U256::from_be_bytes(keccak256(name.as_bytes()).0);
    let mask = (U256::from(1u8) << SELECTOR_BITS) - U256::from(1u8);
    hash & mask
}

/// Format a selector the way event sources emit it: `0x` plus 64 hex digits.
pub fn format_selector(selector: U256) -> String {
    format!("0x{}", hex::encode(selector.to_be_bytes::<32>()))
}

/// Every game event this indexer understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    StartGame,
    AdventurerUpgraded,
    DiscoveredHealth,
    DiscoveredGold,
    DiscoveredXp,
    HitByObstacle,
    DodgedObstacle,
    DiscoveredBeast,
    AmbushedByBeast,
    AttackedBeast,
    AttackedByBeast,
    SlayedBeast,
    AdventurerDied,
    FleeFailed,
    FleeSucceeded,
    PurchasedPotions,
    PurchasedItems,
    EquippedItems,
    DroppedItems,
    UpgradesAvailable,
    ItemsLeveledUp,
    NewHighScore,
    RewardDistribution,
    GameEntropyRotated,
    /// A discriminator not known to this version; carries the raw key.
    Unknown(String),
}

impl EventKind {
    /// All known kinds, in declaration order.
    pub const KNOWN: [EventKind; 24] = [
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
        EventKind::RewardDistribution,
        EventKind::GameEntropyRotated,
    ];

    /// On-chain event name, used to derive the selector.
    pub fn name(&self) -> &str {
        match self {
            EventKind::StartGame => "StartGame",
            EventKind::AdventurerUpgraded => "AdventurerUpgraded",
            EventKind::DiscoveredHealth => "DiscoveredHealth",
            EventKind::DiscoveredGold => "DiscoveredGold",
            EventKind::DiscoveredXp => "DiscoveredXP",
            EventKind::HitByObstacle => "HitByObstacle",
            EventKind::DodgedObstacle => "DodgedObstacle",
            EventKind::DiscoveredBeast => "DiscoveredBeast",
            EventKind::AmbushedByBeast => "AmbushedByBeast",
            EventKind::AttackedBeast => "AttackedBeast",
            EventKind::AttackedByBeast => "AttackedByBeast",
            EventKind::SlayedBeast => "SlayedBeast",
            EventKind::AdventurerDied => "AdventurerDied",
            EventKind::FleeFailed => "FleeFailed",
            EventKind::FleeSucceeded => "FleeSucceeded",
            EventKind::PurchasedPotions => "PurchasedPotions",
            EventKind::PurchasedItems => "PurchasedItems",
            EventKind::EquippedItems => "EquippedItems",
            EventKind::DroppedItems => "DroppedItems",
            EventKind::UpgradesAvailable => "UpgradesAvailable",
            EventKind::ItemsLeveledUp => "ItemsLeveledUp",
            EventKind::NewHighScore => "NewHighScore",
            EventKind::RewardDistribution => "RewardDistribution",
            EventKind::GameEntropyRotated => "GameEntropyRotatedEvent",
            EventKind::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }

    /// Selector for a known kind; `None` for `Unknown`.
    pub fn selector(&self) -> Option<U256> {
        self.is_known().then(|| selector_from_name(self.name()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Unknown(raw) => write!(f, "Unknown({})", raw),
            known => f.write_str(known.name()),
        }
    }
}

/// Selector lookup table, built once at startup.
#[derive(Debug, Clone)]
pub struct SelectorTable {
    by_selector: HashMap<U256, EventKind>,
}

impl SelectorTable {
    pub fn new() -> Self {
        let by_selector = EventKind::KNOWN
            .iter()
            .map(|kind| (selector_from_name(kind.name()), kind.clone()))
            .collect();
        Self { by_selector }
    }

    /// Resolve an event key to its kind.
    ///
    /// Keys are compared numerically so that unpadded or upper-case hex
    /// resolves the same as the canonical 64-digit form.
    pub fn resolve(&self, key: &str) -> EventKind {
        U256::from_str(key.trim())
            .ok()
            .and_then(|selector| self.by_selector.get(&selector).cloned())
            .unwrap_or_else(|| EventKind::Unknown(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_selector.len()
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::new()
    }
}
