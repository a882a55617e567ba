use crate::db::{document, Collection, DocValue, Document, UpsertDescriptor};
use crate::decoding::BeastEncounter;
use crate::transformations::util::state_adventurer_id;

fn beast_key(encounter: &BeastEncounter) -> Document {
    document([
        ("beast", DocValue::from(encounter.id)),
        ("adventurerId", state_adventurer_id(&encounter.adventurer_state)),
        ("seed", DocValue::numeric(encounter.seed)),
    ])
}

/// A newly met beast at full health.
pub fn insert_beast(encounter: &BeastEncounter, timestamp: DocValue) -> UpsertDescriptor {
    let spec = &encounter.beast_spec;
    UpsertDescriptor::insert(
        Collection::Beasts,
        beast_key(encounter),
        document([
            (
                "health",
                DocValue::from(encounter.adventurer_state.adventurer.beast_health),
            ),
            ("level", DocValue::from(spec.level)),
            ("special1", DocValue::from(spec.specials.special1)),
            ("special2", DocValue::from(spec.specials.special2)),
            ("special3", DocValue::from(spec.specials.special3)),
            ("slain", DocValue::from(false)),
            ("slainOnTime", DocValue::Null),
            ("createdTime", timestamp.clone()),
            ("lastUpdatedTime", timestamp.clone()),
            ("timestamp", timestamp),
        ]),
    )
}

/// Health after a strike. When `slain`, also marks the beast slain at
/// `timestamp`.
pub fn update_beast_health(
    encounter: &BeastEncounter,
    slain: bool,
    timestamp: DocValue,
) -> UpsertDescriptor {
    let mut fields = document([
        (
            "health",
            DocValue::from(encounter.adventurer_state.adventurer.beast_health),
        ),
        ("lastUpdatedTime", timestamp.clone()),
        ("timestamp", timestamp.clone()),
    ]);
    if slain {
        fields.insert("slain".into(), DocValue::from(true));
        fields.insert("slainOnTime".into(), timestamp);
    }
    UpsertDescriptor::update(Collection::Beasts, beast_key(encounter), fields)
}
