use crate::db::{document, Collection, DocValue, Document, UpsertDescriptor};
use crate::decoding::{AdventurerState, StartGame};
use crate::transformations::util::{state_adventurer_id, state_owner};

/// Fields overwritten on every snapshot: owner, action counters, stats,
/// gold, equipped slot ids and the current beast's health.
fn mutable_fields(state: &AdventurerState, timestamp: &DocValue) -> Document {
    let adventurer = &state.adventurer;
    let stats = &adventurer.stats;

    let mut fields = document([
        ("owner", state_owner(state)),
        ("lastAction", DocValue::from(adventurer.last_action)),
        ("health", DocValue::from(adventurer.health)),
        ("xp", DocValue::from(adventurer.xp)),
        ("strength", DocValue::from(stats.strength)),
        ("dexterity", DocValue::from(stats.dexterity)),
        ("vitality", DocValue::from(stats.vitality)),
        ("intelligence", DocValue::from(stats.intelligence)),
        ("wisdom", DocValue::from(stats.wisdom)),
        ("charisma", DocValue::from(stats.charisma)),
        ("luck", DocValue::from(stats.luck)),
        ("gold", DocValue::from(adventurer.gold)),
        ("beastHealth", DocValue::from(adventurer.beast_health)),
        ("statUpgrades", DocValue::from(adventurer.stats_points_available)),
        ("actionsPerBlock", DocValue::from(adventurer.actions_per_block)),
        ("lastUpdatedTime", timestamp.clone()),
        ("timestamp", timestamp.clone()),
    ]);
    for (slot, item) in adventurer.slots() {
        fields.insert(slot.to_string(), DocValue::optional_id(item.id));
    }
    fields
}

/// New adventurer document, keyed by id and owner.
pub fn insert_adventurer(event: &StartGame, timestamp: DocValue) -> UpsertDescriptor {
    let state = &event.adventurer_state;
    let meta = &event.adventurer_meta;

    let mut fields = mutable_fields(state, &timestamp);
    fields.extend(document([
        ("name", DocValue::numeric(meta.name)),
        ("homeRealm", DocValue::from(meta.home_realm)),
        ("classType", DocValue::from(meta.class)),
        ("entropy", DocValue::numeric(meta.entropy)),
        ("revealBlock", DocValue::from(event.reveal_block)),
        ("createdTime", timestamp),
    ]));

    UpsertDescriptor::insert(
        Collection::Adventurers,
        document([
            ("adventurerId", state_adventurer_id(state)),
            ("owner", state_owner(state)),
        ]),
        fields,
    )
}

/// Overwrite the mutable fields from a snapshot. Creation fields are left
/// untouched.
pub fn update_adventurer(state: &AdventurerState, timestamp: DocValue) -> UpsertDescriptor {
    UpsertDescriptor::update(
        Collection::Adventurers,
        document([("adventurerId", state_adventurer_id(state))]),
        mutable_fields(state, &timestamp),
    )
}
