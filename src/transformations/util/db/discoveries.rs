use crate::db::{document, Collection, DocValue, UpsertDescriptor};
use crate::decoding::{AdventurerState, BeastEncounter, ObstacleEncounter};
use crate::transformations::util::constants::{DISCOVERY_BEAST, DISCOVERY_ITEM, DISCOVERY_OBSTACLE};
use crate::transformations::util::state_adventurer_id;

/// Fields of one discovery. Whatever a discovery kind does not set stays
/// `None` and is stored as null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub discovery_type: u8,
    pub sub_discovery_type: Option<u8>,
    pub output_amount: Option<u16>,
    pub obstacle: Option<u8>,
    pub obstacle_level: Option<u8>,
    pub dodged_obstacle: Option<bool>,
    pub damage_taken: Option<u16>,
    pub damage_location: Option<u8>,
    pub xp_earned_adventurer: Option<u16>,
    pub xp_earned_items: Option<u16>,
    pub entity: Option<u8>,
    pub entity_level: Option<u16>,
    pub entity_health: Option<u16>,
    pub special1: Option<u8>,
    pub special2: Option<u8>,
    pub special3: Option<u8>,
    pub ambushed: Option<bool>,
    pub seed: Option<u128>,
}

impl Discovery {
    /// Health, gold or xp found while exploring.
    pub fn item(sub_discovery_type: u8, amount: u16) -> Self {
        Self {
            discovery_type: DISCOVERY_ITEM,
            sub_discovery_type: Some(sub_discovery_type),
            output_amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn obstacle(event: &ObstacleEncounter, dodged: bool) -> Self {
        Self {
            discovery_type: DISCOVERY_OBSTACLE,
            obstacle: Some(event.id),
            obstacle_level: Some(event.level),
            dodged_obstacle: Some(dodged),
            damage_taken: Some(event.damage_taken),
            damage_location: Some(event.damage_location),
            xp_earned_adventurer: Some(event.xp_earned_adventurer),
            xp_earned_items: Some(event.xp_earned_items),
            ..Self::default()
        }
    }

    pub fn beast(encounter: &BeastEncounter, ambushed: bool) -> Self {
        let spec = &encounter.beast_spec;
        Self {
            discovery_type: DISCOVERY_BEAST,
            entity: Some(encounter.id),
            entity_level: Some(spec.level),
            entity_health: Some(encounter.adventurer_state.adventurer.beast_health),
            special1: Some(spec.specials.special1),
            special2: Some(spec.specials.special2),
            special3: Some(spec.specials.special3),
            ambushed: Some(ambushed),
            seed: Some(encounter.seed),
            ..Self::default()
        }
    }
}

pub fn insert_discovery(
    state: &AdventurerState,
    discovery: &Discovery,
    tx_hash: DocValue,
    timestamp: DocValue,
) -> UpsertDescriptor {
    UpsertDescriptor::insert(
        Collection::Discoveries,
        document([
            ("txHash", tx_hash),
            ("adventurerId", state_adventurer_id(state)),
        ]),
        document([
            ("adventurerHealth", DocValue::from(state.adventurer.health)),
            ("discoveryType", DocValue::from(discovery.discovery_type)),
            ("subDiscoveryType", DocValue::from(discovery.sub_discovery_type)),
            ("outputAmount", DocValue::from(discovery.output_amount)),
            ("obstacle", DocValue::from(discovery.obstacle)),
            ("obstacleLevel", DocValue::from(discovery.obstacle_level)),
            ("dodgedObstacle", DocValue::from(discovery.dodged_obstacle)),
            ("damageTaken", DocValue::from(discovery.damage_taken)),
            ("damageLocation", DocValue::from(discovery.damage_location)),
            ("xpEarnedAdventurer", DocValue::from(discovery.xp_earned_adventurer)),
            ("xpEarnedItems", DocValue::from(discovery.xp_earned_items)),
            ("entity", DocValue::from(discovery.entity)),
            ("entityLevel", DocValue::from(discovery.entity_level)),
            ("entityHealth", DocValue::from(discovery.entity_health)),
            ("special1", DocValue::from(discovery.special1)),
            ("special2", DocValue::from(discovery.special2)),
            ("special3", DocValue::from(discovery.special3)),
            ("ambushed", DocValue::from(discovery.ambushed)),
            ("seed", discovery.seed.map(DocValue::numeric).unwrap_or(DocValue::Null)),
            ("discoveryTime", timestamp.clone()),
            ("timestamp", timestamp),
        ]),
    )
}
