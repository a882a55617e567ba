//! Event records and the context handed to handlers.

use std::str::FromStr;

use alloy_primitives::U256;

use super::error::TransformationError;
use crate::db::DocValue;
use crate::decoding::{AdventurerState, GameEvent};
use crate::types::block::Block;

/// Block-level metadata attached to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMeta<'a> {
    pub block_number: u64,
    /// Unix seconds
    pub block_timestamp: u64,
    pub transaction_hash: Option<&'a str>,
    /// Position of the event within its block
    pub event_index: usize,
}

/// A raw event as delivered by the block source.
#[derive(Debug, Clone, Copy)]
pub struct EventRecord<'a> {
    /// `keys[0]`, empty if the event carried no keys
    pub discriminator: &'a str,
    pub data: &'a [String],
    pub meta: EventMeta<'a>,
}

impl<'a> EventRecord<'a> {
    pub fn new(discriminator: &'a str, data: &'a [String], meta: EventMeta<'a>) -> Self {
        Self {
            discriminator,
            data,
            meta,
        }
    }

    /// Records for every event of `block`, in block order.
    pub fn from_block(block: &'a Block) -> impl Iterator<Item = EventRecord<'a>> + 'a {
        block
            .events
            .iter()
            .enumerate()
            .map(move |(event_index, item)| EventRecord {
                discriminator: item.event.keys.first().map(String::as_str).unwrap_or(""),
                data: &item.event.data,
                meta: EventMeta {
                    block_number: block.header.block_number,
                    block_timestamp: block.header.timestamp,
                    transaction_hash: item
                        .receipt
                        .as_ref()
                        .and_then(|r| r.transaction_hash.as_deref()),
                    event_index,
                },
            })
    }
}

/// Context provided to transformation handlers: one decoded event plus its
/// block metadata.
pub struct TransformationContext<'a> {
    pub event: &'a GameEvent,
    pub meta: EventMeta<'a>,
}

impl<'a> TransformationContext<'a> {
    pub fn new(event: &'a GameEvent, meta: EventMeta<'a>) -> Self {
        Self { event, meta }
    }

    /// Block timestamp as a document value.
    pub fn timestamp(&self) -> DocValue {
        DocValue::Timestamp(self.meta.block_timestamp)
    }

    /// Transaction hash as a decimal string when it parses as a number.
    /// Null when the event has no receipt.
    pub fn tx_hash(&self) -> DocValue {
        match self.meta.transaction_hash {
            Some(raw) => match U256::from_str(raw.trim()) {
                Ok(hash) => DocValue::felt(hash),
                Err(_) => DocValue::Text(raw.to_string()),
            },
            None => DocValue::Null,
        }
    }

    /// The adventurer snapshot of the event, required by most handlers.
    pub fn adventurer_state(&self) -> Result<&'a AdventurerState, TransformationError> {
        self.event.adventurer_state().ok_or_else(|| {
            TransformationError::MissingData(format!(
                "{} carries no adventurer snapshot",
                self.event.kind()
            ))
        })
    }
}
