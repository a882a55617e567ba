pub mod indexer;
pub mod sink;
