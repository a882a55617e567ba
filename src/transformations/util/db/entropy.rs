use crate::db::{document, Collection, DocValue, UpsertDescriptor};
use crate::decoding::GameEntropyRotated;

pub fn insert_entropy(event: &GameEntropyRotated, timestamp: DocValue) -> UpsertDescriptor {
    UpsertDescriptor::insert(
        Collection::Entropy,
        document([("newHash", DocValue::felt(event.new_hash))]),
        document([
            ("prevHash", DocValue::felt(event.prev_hash)),
            ("prevBlockNumber", DocValue::from(event.prev_block_number)),
            ("prevBlockTimestamp", DocValue::from(event.prev_block_timestamp)),
            ("prevNextRotationBlock", DocValue::from(event.prev_next_rotation_block)),
            ("newBlockNumber", DocValue::from(event.new_block_number)),
            ("newBlockTimestamp", DocValue::from(event.new_block_timestamp)),
            ("newNextRotationBlock", DocValue::from(event.new_next_rotation_block)),
            ("blocksPerHour", DocValue::from(event.blocks_per_hour)),
            ("timestamp", timestamp),
        ]),
    )
}
