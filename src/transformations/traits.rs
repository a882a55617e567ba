//! Core traits for transformation handlers.
//!
//! Handlers receive one decoded game event at a time and project it into
//! upsert descriptors for their collection.

use crate::db::{Collection, UpsertDescriptor};
use crate::decoding::EventKind;

use super::context::TransformationContext;
use super::error::TransformationError;

/// Core trait that all transformation handlers must implement.
///
/// Handling is synchronous and pure: the same event and metadata always
/// produce the same descriptors.
pub trait TransformationHandler: Send + Sync + 'static {
    /// Unique name for this handler (used in logging).
    fn name(&self) -> &'static str;

    /// Collection this handler writes to.
    fn collection(&self) -> Collection;

    /// Project one event into zero or more descriptors.
    fn handle(
        &self,
        ctx: &TransformationContext<'_>,
    ) -> Result<Vec<UpsertDescriptor>, TransformationError>;
}

/// Handlers that respond to game events.
pub trait EventHandler: TransformationHandler {
    /// Event kinds this handler responds to.
    fn triggers(&self) -> Vec<EventKind>;
}
