use crate::db::{document, Collection, DocValue, UpsertDescriptor};
use crate::decoding::{AdventurerState, PlayerReward};
use crate::transformations::util::{adventurer_id, state_adventurer_id, state_owner};

pub fn update_high_score(
    state: &AdventurerState,
    rank: u8,
    tx_hash: DocValue,
    timestamp: DocValue,
) -> UpsertDescriptor {
    UpsertDescriptor::update(
        Collection::Scores,
        document([
            ("adventurerId", state_adventurer_id(state)),
            ("owner", state_owner(state)),
            ("rank", DocValue::from(rank)),
        ]),
        document([
            ("xp", DocValue::from(state.adventurer.xp)),
            ("txHash", tx_hash),
            ("scoreTime", timestamp.clone()),
            ("timestamp", timestamp),
        ]),
    )
}

/// Payout for a leaderboard place. The amount is set, not accumulated, so
/// replaying a distribution leaves the same total.
pub fn update_total_payout(reward: &PlayerReward, timestamp: DocValue) -> UpsertDescriptor {
    UpsertDescriptor::update(
        Collection::Scores,
        document([
            ("adventurerId", adventurer_id(reward.adventurer_id)),
            ("owner", DocValue::felt(reward.address)),
            ("rank", DocValue::from(reward.rank)),
        ]),
        document([
            ("totalPayout", DocValue::numeric(reward.amount)),
            ("timestamp", timestamp),
        ]),
    )
}
