//! Block source: reads a JSON-lines block archive and feeds blocks holding
//! game events to the transformation engine.

use std::path::Path;
use std::str::FromStr;

use alloy_primitives::U256;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

use crate::types::block::Block;

#[derive(Debug, Error)]
pub enum BlockSourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed block at line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Channel send error")]
    ChannelSend,
}

/// Which blocks and events reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFilter {
    pub game_address: U256,
    pub start_block: u64,
}

impl BlockFilter {
    /// Drop events from other contracts. Returns `None` when the block is
    /// before the start block or holds no game events.
    pub fn apply(&self, mut block: Block) -> Option<Block> {
        if block.header.block_number < self.start_block {
            return None;
        }
        block.events.retain(|item| {
            U256::from_str(item.event.from_address.trim())
                .map(|address| address == self.game_address)
                .unwrap_or(false)
        });
        if block.events.is_empty() {
            None
        } else {
            Some(block)
        }
    }
}

/// Totals reported when the source is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub lines: usize,
    pub blocks_sent: usize,
    pub events_sent: usize,
}

pub async fn stream_blocks_from_file(
    path: &Path,
    filter: BlockFilter,
    tx: Sender<Block>,
) -> Result<StreamStats, BlockSourceError> {
    let file = File::open(path).await?;
    tracing::info!(
        "Streaming blocks from {} starting at block {}",
        path.display(),
        filter.start_block
    );
    stream_blocks(BufReader::new(file), filter, tx).await
}

/// Read one block per line, in order, and send the filtered blocks.
///
/// Blank lines are skipped. A line that does not parse stops the stream.
pub async fn stream_blocks<R>(
    reader: R,
    filter: BlockFilter,
    tx: Sender<Block>,
) -> Result<StreamStats, BlockSourceError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = StreamStats::default();

    while let Some(line) = lines.next_line().await? {
        stats.lines += 1;
        if line.trim().is_empty() {
            continue;
        }

        let block: Block =
            serde_json::from_str(&line).map_err(|source| BlockSourceError::Malformed {
                line: stats.lines,
                source,
            })?;

        let Some(block) = filter.apply(block) else {
            continue;
        };

        stats.blocks_sent += 1;
        stats.events_sent += block.events.len();
        tx.send(block)
            .await
            .map_err(|_| BlockSourceError::ChannelSend)?;
    }

    tracing::info!(
        "Block source finished: {} lines read, {} blocks with {} game events sent",
        stats.lines,
        stats.blocks_sent,
        stats.events_sent
    );

    Ok(stats)
}
