//! Transformation engine that orchestrates handler execution.
//!
//! The engine resolves each event's discriminator, decodes the payload once,
//! invokes every registered handler for the kind and hands each block's
//! descriptors to a document sink as one batch.

use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use super::context::{EventRecord, TransformationContext};
use super::error::TransformationError;
use super::registry::TransformationRegistry;
use crate::db::{DocumentSink, UpsertDescriptor};
use crate::decoding::{EventCatalog, EventKind};
use crate::types::block::Block;

/// Descriptors produced for one block plus what was skipped.
#[derive(Debug, Default)]
pub struct BlockOutcome {
    pub descriptors: Vec<UpsertDescriptor>,
    pub events: usize,
    pub unknown: usize,
    pub failed: usize,
}

/// Totals for a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub blocks: usize,
    pub events: usize,
    pub unknown: usize,
    pub failed: usize,
    pub descriptors: usize,
}

impl RunStats {
    fn record(&mut self, outcome: &BlockOutcome) {
        self.blocks += 1;
        self.events += outcome.events;
        self.unknown += outcome.unknown;
        self.failed += outcome.failed;
        self.descriptors += outcome.descriptors.len();
    }
}

pub struct TransformationEngine {
    registry: Arc<TransformationRegistry>,
    catalog: EventCatalog,
}

impl TransformationEngine {
    pub fn new(registry: Arc<TransformationRegistry>) -> Self {
        Self {
            registry,
            catalog: EventCatalog::new(),
        }
    }

    /// Transform a single event. Unknown discriminators yield an empty batch.
    pub fn transform(
        &self,
        record: &EventRecord<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        let kind = self.catalog.resolve(record.discriminator);
        self.route(&kind, record)
    }

    fn route(
        &self,
        kind: &EventKind,
        record: &EventRecord<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
        if !kind.is_known() {
            tracing::warn!(
                "Block {} event {}: unknown event key {}",
                record.meta.block_number,
                record.meta.event_index,
                kind
            );
            return Ok(Vec::new());
        }

        let event = self.catalog.decode(kind, record.data)?;
        let ctx = TransformationContext::new(&event, record.meta);

        let mut ops = Vec::new();
        for handler in self.registry.handlers_for_event(kind) {
            let handler_ops = handler.handle(&ctx).map_err(|e| {
                TransformationError::handler(handler.name(), e.to_string())
            })?;
            ops.extend(handler_ops);
        }

        debug_assert!(ops.iter().all(UpsertDescriptor::key_is_consistent));
        tracing::debug!(
            "Block {} event {}: {} -> {} descriptor(s)",
            record.meta.block_number,
            record.meta.event_index,
            kind,
            ops.len()
        );

        Ok(ops)
    }

    /// Transform every event of a block in order. A failing event is logged
    /// and skipped; the rest of the block still produces its descriptors.
    pub fn transform_block(&self, block: &Block) -> BlockOutcome {
        let mut outcome = BlockOutcome::default();

        for record in EventRecord::from_block(block) {
            outcome.events += 1;
            let kind = self.catalog.resolve(record.discriminator);
            if !kind.is_known() {
                outcome.unknown += 1;
            }

            match self.route(&kind, &record) {
                Ok(ops) => outcome.descriptors.extend(ops),
                Err(e) => {
                    outcome.failed += 1;
                    tracing::warn!(
                        "Block {} event {} ({}): skipped: {}",
                        record.meta.block_number,
                        record.meta.event_index,
                        kind,
                        e
                    );
                }
            }
        }

        outcome
    }

    /// Receive blocks until the channel closes, writing each block's
    /// descriptors to `sink` as one batch.
    pub async fn run(
        &self,
        mut blocks_rx: Receiver<Block>,
        sink: Arc<dyn DocumentSink>,
    ) -> Result<RunStats, TransformationError> {
        tracing::info!(
            "Transformation engine started with {} handlers, writing to {}",
            self.registry.handler_count(),
            sink.name()
        );

        let mut stats = RunStats::default();

        while let Some(block) = blocks_rx.recv().await {
            let outcome = self.transform_block(&block);
            stats.record(&outcome);

            if !outcome.descriptors.is_empty() {
                sink.apply(block.header.block_number, &outcome.descriptors)
                    .await?;
            }
        }

        tracing::info!(
            "Transformation engine finished: {} blocks, {} events ({} unknown, {} failed), {} descriptors",
            stats.blocks,
            stats.events,
            stats.unknown,
            stats.failed,
            stats.descriptors
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{document, Collection, DocValue, MemoryStore, WriteMode};
    use crate::decoding::test_support::{key_for, AdventurerFixture};
    use crate::transformations::build_registry;
    use crate::transformations::context::EventMeta;
    use crate::transformations::test_support::{
        equipped_items_wire, meta, slayed_beast_wire, start_game_wire, BLOCK_TIMESTAMP,
    };
    use crate::types::block::{BlockHeader, Event, EventWithReceipt, Receipt};
    use tokio::sync::mpsc;

    fn engine() -> TransformationEngine {
        TransformationEngine::new(Arc::new(build_registry()))
    }

    fn event(kind: &EventKind, data: Vec<String>, tx: Option<&str>) -> EventWithReceipt {
        EventWithReceipt {
            event: Event {
                from_address: "0x1".into(),
                keys: vec![key_for(kind)],
                data,
            },
            receipt: Some(Receipt {
                transaction_hash: tx.map(String::from),
            }),
        }
    }

    fn block(number: u64, events: Vec<EventWithReceipt>) -> Block {
        Block {
            header: BlockHeader {
                block_number: number,
                timestamp: BLOCK_TIMESTAMP,
            },
            events,
        }
    }

    #[test]
    fn test_start_game_scenario() {
        let engine = engine();
        let key = key_for(&EventKind::StartGame);
        let data = start_game_wire(&AdventurerFixture::default());
        let ops = engine
            .transform(&EventRecord::new(&key, &data, meta(Some("0x1"))))
            .unwrap();

        assert_eq!(ops.len(), 1 + 102);
        let adventurer = &ops[0];
        assert_eq!(adventurer.collection, Collection::Adventurers);
        assert_eq!(adventurer.mode, WriteMode::Insert);
        assert_eq!(
            adventurer.key.keys().collect::<Vec<_>>(),
            vec!["adventurerId", "owner"]
        );

        let item_inserts: Vec<_> = ops[1..]
            .iter()
            .filter(|op| op.collection == Collection::Items && op.mode == WriteMode::Insert)
            .collect();
        assert_eq!(item_inserts.len(), 101);
        assert!(item_inserts.iter().all(|op| {
            op.field("owner") == Some(&DocValue::Bool(false))
                && op.field("equipped") == Some(&DocValue::Bool(false))
                && op.field("xp") == Some(&DocValue::Uint64(0))
        }));
    }

    #[test]
    fn test_slayed_beast_scenario() {
        let engine = engine();
        let key = key_for(&EventKind::SlayedBeast);
        let data = slayed_beast_wire(&AdventurerFixture::default(), 50, 20, 5);
        let ops = engine
            .transform(&EventRecord::new(&key, &data, meta(Some("0x1"))))
            .unwrap();

        let collections: Vec<Collection> = ops.iter().map(|op| op.collection).collect();
        assert_eq!(
            collections,
            vec![
                Collection::Adventurers,
                Collection::Battles,
                Collection::Beasts,
                Collection::Items,
            ]
        );

        let battle = &ops[1];
        assert_eq!(battle.field("attacker"), Some(&DocValue::Text("Adventurer".into())));
        assert_eq!(battle.field("damageDealt"), Some(&DocValue::Uint64(50)));
        assert_eq!(battle.field("damageTaken"), Some(&DocValue::Uint64(0)));
        assert_eq!(battle.field("fled"), Some(&DocValue::Null));
        assert_eq!(battle.field("xpEarnedAdventurer"), Some(&DocValue::Uint64(20)));
        assert_eq!(battle.field("xpEarnedItems"), Some(&DocValue::Uint64(5)));
    }

    #[test]
    fn test_equipped_items_scenario() {
        let engine = engine();
        let key = key_for(&EventKind::EquippedItems);
        let data = equipped_items_wire(&AdventurerFixture::default(), &[3, 7], &[9]);
        let ops = engine
            .transform(&EventRecord::new(&key, &data, meta(None)))
            .unwrap();

        let items: Vec<_> = ops
            .iter()
            .filter(|op| op.collection == Collection::Items)
            .collect();
        assert_eq!(items.len(), 3);
        let expected = [(3u64, true), (7, true), (9, false)];
        for (op, (item, equipped)) in items.iter().zip(expected) {
            assert_eq!(
                op.key,
                document([
                    ("item", DocValue::Uint64(item)),
                    ("adventurerId", DocValue::Numeric("7".into())),
                ])
            );
            assert_eq!(op.field("equipped"), Some(&DocValue::Bool(equipped)));
        }
    }

    #[test]
    fn test_unknown_discriminator_yields_nothing() {
        let engine = engine();
        let data = vec!["0x1".to_string()];
        let ops = engine
            .transform(&EventRecord::new("0x1234", &data, meta(None)))
            .unwrap();
        assert!(ops.is_empty());

        let ops = engine
            .transform(&EventRecord::new("", &data, meta(None)))
            .unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_bad_event_does_not_poison_block() {
        let engine = engine();
        let fixture = AdventurerFixture::default();
        let mut truncated = slayed_beast_wire(&fixture, 50, 20, 5);
        truncated.truncate(10);
        let block = block(
            7,
            vec![
                event(&EventKind::SlayedBeast, truncated, Some("0x1")),
                EventWithReceipt {
                    event: Event {
                        from_address: "0x1".into(),
                        keys: vec!["0x99".into()],
                        data: Vec::new(),
                    },
                    receipt: None,
                },
                event(
                    &EventKind::EquippedItems,
                    equipped_items_wire(&fixture, &[3], &[]),
                    Some("0x2"),
                ),
            ],
        );

        let outcome = engine.transform_block(&block);
        assert_eq!(outcome.events, 3);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.unknown, 1);
        // adventurer update plus one item
        assert_eq!(outcome.descriptors.len(), 2);
    }

    #[test]
    fn test_event_meta_from_block() {
        let mut without_receipt = event(&EventKind::NewHighScore, Vec::new(), None);
        without_receipt.receipt = None;
        let block = block(
            9,
            vec![
                event(&EventKind::StartGame, Vec::new(), Some("0xa")),
                without_receipt,
            ],
        );

        let metas: Vec<EventMeta<'_>> = EventRecord::from_block(&block).map(|r| r.meta).collect();
        assert_eq!(metas[0].transaction_hash, Some("0xa"));
        assert_eq!(metas[1].transaction_hash, None);
        assert_eq!(metas[1].event_index, 1);
        assert_eq!(metas[1].block_number, 9);
    }

    #[tokio::test]
    async fn test_run_replay_is_idempotent() {
        let fixture = AdventurerFixture::default();
        let blocks = || {
            vec![
                block(
                    1,
                    vec![event(&EventKind::StartGame, start_game_wire(&fixture), Some("0x1"))],
                ),
                block(
                    2,
                    vec![
                        event(
                            &EventKind::SlayedBeast,
                            slayed_beast_wire(&fixture, 50, 20, 5),
                            Some("0x2"),
                        ),
                        event(
                            &EventKind::EquippedItems,
                            equipped_items_wire(&fixture, &[3, 7], &[9]),
                            None,
                        ),
                    ],
                ),
            ]
        };

        let engine = engine();
        let store = Arc::new(MemoryStore::new());

        let (tx, rx) = mpsc::channel(4);
        for b in blocks() {
            tx.send(b).await.unwrap();
        }
        drop(tx);
        let stats = engine.run(rx, store.clone()).await.unwrap();
        assert_eq!(stats.blocks, 2);
        assert_eq!(stats.failed, 0);
        let once = store.snapshot().await;

        let (tx, rx) = mpsc::channel(4);
        for b in blocks() {
            tx.send(b).await.unwrap();
        }
        drop(tx);
        engine.run(rx, store.clone()).await.unwrap();
        assert_eq!(store.snapshot().await, once);

        assert_eq!(store.count(Collection::Adventurers).await, 1);
        assert_eq!(store.count(Collection::Items).await, 101);
        let adventurer = store
            .get(
                Collection::Adventurers,
                &document([("adventurerId", DocValue::Numeric("7".into()))]),
            )
            .await
            .unwrap();
        assert_eq!(adventurer.get("homeRealm"), Some(&DocValue::Uint64(4)));
        assert_eq!(adventurer.get("health"), Some(&DocValue::Uint64(100)));
    }
}
