use crate::db::{document, Collection, DocValue, Document, UpsertDescriptor};
use crate::decoding::{AdventurerState, ItemLeveledUp};
use crate::transformations::util::constants::ITEM_COUNT;
use crate::transformations::util::{state_adventurer_id, state_owner};

fn item_key(item: u8, state: &AdventurerState) -> Document {
    document([
        ("item", DocValue::from(item)),
        ("adventurerId", state_adventurer_id(state)),
    ])
}

fn update_item(
    item: u8,
    state: &AdventurerState,
    mut fields: Document,
    timestamp: DocValue,
) -> UpsertDescriptor {
    fields.insert("timestamp".into(), timestamp);
    UpsertDescriptor::update(Collection::Items, item_key(item, state), fields)
}

/// One unowned document per item id.
pub fn insert_all_items(state: &AdventurerState, timestamp: DocValue) -> Vec<UpsertDescriptor> {
    (1..=ITEM_COUNT)
        .map(|item| {
            UpsertDescriptor::insert(
                Collection::Items,
                item_key(item, state),
                document([
                    ("owner", DocValue::from(false)),
                    ("equipped", DocValue::from(false)),
                    ("ownerAddress", DocValue::Null),
                    ("xp", DocValue::from(0u16)),
                    ("special1", DocValue::from(0u8)),
                    ("special2", DocValue::from(0u8)),
                    ("special3", DocValue::from(0u8)),
                    ("isAvailable", DocValue::from(false)),
                    ("purchasedTime", DocValue::Null),
                    ("timestamp", timestamp.clone()),
                ]),
            )
        })
        .collect()
}

/// The weapon an adventurer starts with is owned and equipped.
pub fn equip_starter_weapon(state: &AdventurerState, timestamp: DocValue) -> UpsertDescriptor {
    update_item(
        state.adventurer.weapon().id,
        state,
        document([
            ("owner", DocValue::from(true)),
            ("equipped", DocValue::from(true)),
            ("ownerAddress", state_owner(state)),
        ]),
        timestamp,
    )
}

pub fn purchase_item(item: u8, state: &AdventurerState, timestamp: DocValue) -> UpsertDescriptor {
    update_item(
        item,
        state,
        document([
            ("owner", DocValue::from(true)),
            ("equipped", DocValue::from(false)),
            ("ownerAddress", state_owner(state)),
            ("purchasedTime", timestamp.clone()),
        ]),
        timestamp,
    )
}

pub fn set_equipped(
    item: u8,
    equipped: bool,
    state: &AdventurerState,
    timestamp: DocValue,
) -> UpsertDescriptor {
    update_item(
        item,
        state,
        document([("equipped", DocValue::from(equipped))]),
        timestamp,
    )
}

pub fn drop_item(item: u8, state: &AdventurerState, timestamp: DocValue) -> UpsertDescriptor {
    update_item(
        item,
        state,
        document([
            ("owner", DocValue::from(false)),
            ("equipped", DocValue::from(false)),
            ("ownerAddress", DocValue::Null),
        ]),
        timestamp,
    )
}

/// XP of every occupied equipment slot of the snapshot.
pub fn update_equipped_xp(state: &AdventurerState, timestamp: DocValue) -> Vec<UpsertDescriptor> {
    state
        .adventurer
        .slots()
        .filter(|(_, item)| !item.is_empty())
        .map(|(_, item)| {
            update_item(
                item.id,
                state,
                document([("xp", DocValue::from(item.xp))]),
                timestamp.clone(),
            )
        })
        .collect()
}

/// Newly unlocked specials. Prefixes take precedence over the suffix.
pub fn update_specials(
    leveled: &ItemLeveledUp,
    state: &AdventurerState,
    timestamp: DocValue,
) -> Option<UpsertDescriptor> {
    let specials = &leveled.specials;
    let fields = if leveled.prefixes_unlocked {
        document([
            ("special2", DocValue::from(specials.special2)),
            ("special3", DocValue::from(specials.special3)),
        ])
    } else if leveled.suffix_unlocked {
        document([("special1", DocValue::from(specials.special1))])
    } else {
        return None;
    };
    Some(update_item(leveled.item_id, state, fields, timestamp))
}

pub fn set_available(
    item: u8,
    available: bool,
    state: &AdventurerState,
    timestamp: DocValue,
) -> UpsertDescriptor {
    update_item(
        item,
        state,
        document([("isAvailable", DocValue::from(available))]),
        timestamp,
    )
}

/// Clear the availability flag of every item.
pub fn reset_availability(state: &AdventurerState, timestamp: DocValue) -> Vec<UpsertDescriptor> {
    (1..=ITEM_COUNT)
        .map(|item| set_available(item, false, state, timestamp.clone()))
        .collect()
}
