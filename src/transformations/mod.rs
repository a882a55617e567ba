//! Transformation system turning decoded game events into document upserts.
//!
//! This module provides:
//! - Handler traits for projecting one decoded event into upsert descriptors
//! - A transformation context with the event and its block metadata
//! - A handler registry keyed by event kind
//! - An engine that routes blocks through the handlers and into a sink
//!
//! # Architecture
//!
//! ```text
//! Block ──► TransformationEngine ──► EventCatalog (resolve + decode)
//!                 │
//!                 └─► Handlers (one per collection) ──► UpsertDescriptors ──► DocumentSink
//! ```
//!
//! # Example Handler
//!
//! ```ignore
//! use crate::db::{Collection, UpsertDescriptor};
//! use crate::decoding::{EventKind, GameEvent};
//! use crate::transformations::{
//!     EventHandler, TransformationContext, TransformationError, TransformationHandler,
//! };
//!
//! pub struct DeathHandler;
//!
//! impl TransformationHandler for DeathHandler {
//!     fn name(&self) -> &'static str { "DeathHandler" }
//!
//!     fn collection(&self) -> Collection { Collection::Adventurers }
//!
//!     fn handle(
//!         &self,
//!         ctx: &TransformationContext<'_>,
//!     ) -> Result<Vec<UpsertDescriptor>, TransformationError> {
//!         let GameEvent::AdventurerDied(event) = ctx.event else {
//!             return Ok(Vec::new());
//!         };
//!         // Build descriptors from the event
//!         Ok(Vec::new())
//!     }
//! }
//!
//! impl EventHandler for DeathHandler {
//!     fn triggers(&self) -> Vec<EventKind> {
//!         vec![EventKind::AdventurerDied]
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod event;
pub mod registry;
pub mod traits;
pub mod util;

#[cfg(test)]
pub mod test_support;

// Re-exports for convenience
pub use context::{EventMeta, EventRecord, TransformationContext};
pub use engine::{BlockOutcome, RunStats, TransformationEngine};
pub use error::TransformationError;
pub use registry::{build_registry, TransformationRegistry};
pub use traits::{EventHandler, TransformationHandler};
