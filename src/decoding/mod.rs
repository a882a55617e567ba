mod catalog;
mod error;
mod event_parsing;
mod parser;
mod payloads;
pub mod schema;
mod value;

#[cfg(test)]
pub mod test_support;

pub use catalog::EventCatalog;
pub use error::DecodeError;
pub use event_parsing::{format_selector, selector_from_name, EventKind, SelectorTable};
pub use parser::{Parser, RecordField};
pub use payloads::*;
pub use value::DecodedValue;
