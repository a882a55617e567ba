pub mod console;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod sink;
pub mod types;

pub use console::ConsoleSink;
pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::DbPool;
pub use sink::DocumentSink;
pub use types::{document, Collection, DocValue, Document, UpsertDescriptor, WriteMode};
