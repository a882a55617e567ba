use async_trait::async_trait;

use super::error::DbError;
use super::types::UpsertDescriptor;

/// Receives the upserts produced for one block.
///
/// Descriptors are applied in order; implementations should treat the batch
/// as one unit where the backing store allows it.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn apply(&self, block_number: u64, batch: &[UpsertDescriptor]) -> Result<(), DbError>;
}
