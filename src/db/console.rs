use std::io::Write;

use async_trait::async_trait;

use super::error::DbError;
use super::sink::DocumentSink;
use super::types::UpsertDescriptor;

/// Prints each descriptor as one JSON line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn write_batch<W: Write>(
        out: &mut W,
        block_number: u64,
        batch: &[UpsertDescriptor],
    ) -> Result<(), DbError> {
        for descriptor in batch {
            let line = serde_json::json!({
                "block": block_number,
                "collection": descriptor.collection,
                "mode": descriptor.mode,
                "key": descriptor.key,
                "update": descriptor.update,
            });
            serde_json::to_writer(&mut *out, &line)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl DocumentSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn apply(&self, block_number: u64, batch: &[UpsertDescriptor]) -> Result<(), DbError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        Self::write_batch(&mut lock, block_number, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{document, Collection, DocValue};

    #[test]
    fn test_one_line_per_descriptor() {
        let batch = vec![
            UpsertDescriptor::update(
                Collection::Items,
                document([("item", DocValue::from(3u8))]),
                document([("equipped", DocValue::from(true))]),
            ),
            UpsertDescriptor::update(
                Collection::Items,
                document([("item", DocValue::from(9u8))]),
                document([("equipped", DocValue::from(false))]),
            ),
        ];
        let mut out = Vec::new();
        ConsoleSink::write_batch(&mut out, 42, &batch).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["block"], 42);
        assert_eq!(first["collection"], "items");
        assert_eq!(first["update"]["equipped"], true);
    }
}
