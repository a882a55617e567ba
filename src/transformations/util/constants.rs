/// Item ids run from 1 to `ITEM_COUNT` inclusive.
pub const ITEM_COUNT: u8 = 101;

/// Battle attacker roles.
pub const ATTACKER_ADVENTURER: &str = "Adventurer";
pub const ATTACKER_BEAST: &str = "Beast";

/// `discoveryType` values.
pub const DISCOVERY_BEAST: u8 = 1;
pub const DISCOVERY_OBSTACLE: u8 = 2;
pub const DISCOVERY_ITEM: u8 = 3;

/// `subDiscoveryType` values for item discoveries.
pub const SUB_DISCOVERY_HEALTH: u8 = 1;
pub const SUB_DISCOVERY_GOLD: u8 = 2;
pub const SUB_DISCOVERY_XP: u8 = 3;
