use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::{EventKind, GameEvent};
use crate::transformations::context::TransformationContext;
use crate::transformations::error::TransformationError;
use crate::transformations::registry::TransformationRegistry;
use crate::transformations::traits::{EventHandler, TransformationHandler};

use crate::transformations::util::db::scores::{update_high_score, update_total_payout};

/// Leaderboard entries and their payouts.
pub struct ScoreHandler;

impl TransformationHandler for ScoreHandler {
    fn name(&self) -> &'static str {
        "ScoreHandler"
    }

    fn collection(&self) -> Collection {
        Collection::Scores
    }

    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let ops = match ctx.event {
            GameEvent::NewHighScore(e) => vec![update_high_score(
                &e.adventurer_state,
                e.rank,
                ctx.tx_hash(),
                ctx.timestamp(),
            )],
            GameEvent::RewardDistribution(e) => e
                .places()
                .into_iter()
                .filter(|reward| !reward.amount.is_zero())
                .map(|reward| update_total_payout(reward, ctx.timestamp()))
                .collect(),
            _ => Vec::new(),
        };
        Ok(ops)
    }
}

impl EventHandler for ScoreHandler {
    fn triggers(&self) -> Vec<EventKind> {
        vec![EventKind::NewHighScore, EventKind::RewardDistribution]
    }
}

pub fn register_handlers(registry: &mut TransformationRegistry) {
    registry.register_event_handler(ScoreHandler);
}
