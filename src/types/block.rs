//! Block archive format delivered by the block source.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: BlockHeader,
    #[serde(default)]
    pub events: Vec<EventWithReceipt>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    #[serde(deserialize_with = "deserialize_u64")]
    pub block_number: u64,
    /// Unix seconds
    #[serde(deserialize_with = "deserialize_u64")]
    pub timestamp: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventWithReceipt {
    pub event: Event,
    #[serde(default)]
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub from_address: String,
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Accept `12`, `"12"` or `"0xc"`.
fn deserialize_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => {
            let s = s.trim();
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => s.parse::<u64>(),
            };
            parsed.map_err(|e| de::Error::custom(format!("invalid integer '{}': {}", s, e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_line() {
        let line = r#"{
            "header": {"blockNumber": "0x10", "timestamp": 1700000000},
            "events": [
                {"event": {"fromAddress": "0x1", "keys": ["0x2"], "data": ["0x3", "0x4"]},
                 "receipt": {"transactionHash": "0xdead"}},
                {"event": {"fromAddress": "0x1", "keys": [], "data": []}}
            ]
        }"#;
        let block: Block = serde_json::from_str(line).unwrap();
        assert_eq!(block.header.block_number, 16);
        assert_eq!(block.header.timestamp, 1_700_000_000);
        assert_eq!(block.events.len(), 2);
        assert_eq!(
            block.events[0]
                .receipt
                .as_ref()
                .and_then(|r| r.transaction_hash.as_deref()),
            Some("0xdead")
        );
        assert!(block.events[1].receipt.is_none());
    }

    #[test]
    fn test_bad_block_number() {
        let line = r#"{"header": {"blockNumber": "ten", "timestamp": 0}}"#;
        assert!(serde_json::from_str::<Block>(line).is_err());
    }
}
