use std::collections::BTreeMap;
use std::fmt;

use alloy_primitives::U256;
use serde::ser::Serializer;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Target collection of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Adventurers,
    Battles,
    Beasts,
    Discoveries,
    Items,
    Scores,
    Entropy,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Adventurers,
        Collection::Battles,
        Collection::Beasts,
        Collection::Discoveries,
        Collection::Items,
        Collection::Scores,
        Collection::Entropy,
    ];

    /// Collection name, also used as the table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Adventurers => "adventurers",
            Collection::Battles => "battles",
            Collection::Beasts => "beasts",
            Collection::Discoveries => "discoveries",
            Collection::Items => "items",
            Collection::Scores => "scores",
            Collection::Entropy => "entropy",
        }
    }

    /// Key fields that address a stored document. Keys may carry extra
    /// fields (the adventurer insert also keys on owner) which are written
    /// but do not change which document is hit.
    pub fn identity_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Adventurers => &["adventurerId"],
            Collection::Battles => &["txHash", "adventurerId", "beast", "seed"],
            Collection::Beasts => &["beast", "adventurerId", "seed"],
            Collection::Discoveries => &["txHash", "adventurerId"],
            Collection::Items => &["item", "adventurerId"],
            Collection::Scores => &["adventurerId", "owner", "rank"],
            Collection::Entropy => &["newHash"],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored in a document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocValue {
    Null,
    Bool(bool),
    /// Small unsigned integer (u8/u16/u64)
    Uint64(u64),
    /// Decimal string for u128/u256/felt252 values
    Numeric(String),
    Text(String),
    /// Unix timestamp in seconds
    Timestamp(u64),
}

impl DocValue {
    pub fn numeric<T: ToString>(value: T) -> Self {
        DocValue::Numeric(value.to_string())
    }

    pub fn felt(value: U256) -> Self {
        DocValue::Numeric(value.to_string())
    }

    /// Slot and entity ids where 0 means "none".
    pub fn optional_id(id: u8) -> Self {
        if id == 0 {
            DocValue::Null
        } else {
            DocValue::Uint64(id as u64)
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DocValue::Uint64(v) | DocValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::Numeric(v) | DocValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            DocValue::Null => JsonValue::Null,
            DocValue::Bool(v) => JsonValue::Bool(*v),
            DocValue::Uint64(v) | DocValue::Timestamp(v) => JsonValue::from(*v),
            DocValue::Numeric(v) | DocValue::Text(v) => {
                JsonValue::String(v.clone())
            }
        }
    }
}

impl Serialize for DocValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocValue::Null => serializer.serialize_none(),
            DocValue::Bool(v) => serializer.serialize_bool(*v),
            DocValue::Uint64(v) | DocValue::Timestamp(v) => serializer.serialize_u64(*v),
            DocValue::Numeric(v) | DocValue::Text(v) => {
                serializer.serialize_str(v)
            }
        }
    }
}

impl From<bool> for DocValue {
    fn from(v: bool) -> Self {
        DocValue::Bool(v)
    }
}

impl From<u8> for DocValue {
    fn from(v: u8) -> Self {
        DocValue::Uint64(v as u64)
    }
}

impl From<u16> for DocValue {
    fn from(v: u16) -> Self {
        DocValue::Uint64(v as u64)
    }
}

impl From<u64> for DocValue {
    fn from(v: u64) -> Self {
        DocValue::Uint64(v)
    }
}

impl From<&str> for DocValue {
    fn from(v: &str) -> Self {
        DocValue::Text(v.to_string())
    }
}

impl<T: Into<DocValue>> From<Option<T>> for DocValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(DocValue::Null)
    }
}

/// Field name to value mapping. Ordered so serialised keys are stable.
pub type Document = BTreeMap<String, DocValue>;

/// Build a document from `(name, value)` pairs.
pub fn document<I, K>(fields: I) -> Document
where
    I: IntoIterator<Item = (K, DocValue)>,
    K: Into<String>,
{
    fields.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// How an upsert treats an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Replace the whole document.
    Insert,
    /// Merge the fields into the document, creating it if absent.
    Update,
}

/// One write produced by a transformation handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertDescriptor {
    pub collection: Collection,
    pub key: Document,
    pub update: Document,
    pub mode: WriteMode,
}

impl UpsertDescriptor {
    /// Build a descriptor. The key fields are copied into the update so that
    /// replaying the descriptor lands on the same document state.
    pub fn new(collection: Collection, mode: WriteMode, key: Document, fields: Document) -> Self {
        let mut update = key.clone();
        update.extend(fields);
        Self {
            collection,
            key,
            update,
            mode,
        }
    }

    pub fn insert(collection: Collection, key: Document, fields: Document) -> Self {
        Self::new(collection, WriteMode::Insert, key, fields)
    }

    pub fn update(collection: Collection, key: Document, fields: Document) -> Self {
        Self::new(collection, WriteMode::Update, key, fields)
    }

    /// Every key field appears in the update with the same value.
    pub fn key_is_consistent(&self) -> bool {
        self.key
            .iter()
            .all(|(name, value)| self.update.get(name) == Some(value))
    }

    pub fn field(&self, name: &str) -> Option<&DocValue> {
        self.update.get(name)
    }

    /// The key restricted to the collection's identity fields.
    pub fn identity(&self) -> Document {
        identity_of(self.collection, &self.key)
    }

    pub fn identity_json(&self) -> JsonValue {
        to_json_object(&self.identity())
    }

    pub fn update_json(&self) -> JsonValue {
        to_json_object(&self.update)
    }
}

/// Project `key` onto the identity fields of `collection`.
pub fn identity_of(collection: Collection, key: &Document) -> Document {
    key.iter()
        .filter(|(name, _)| collection.identity_fields().contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub fn to_json_object(doc: &Document) -> JsonValue {
    JsonValue::Object(
        doc.iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_copied_into_update() {
        let descriptor = UpsertDescriptor::update(
            Collection::Items,
            document([("item", DocValue::from(3u8)), ("adventurerId", DocValue::numeric(7))]),
            document([("equipped", DocValue::from(true))]),
        );
        assert!(descriptor.key_is_consistent());
        assert_eq!(descriptor.field("item"), Some(&DocValue::Uint64(3)));
        assert_eq!(descriptor.update.len(), 3);
    }

    #[test]
    fn test_fields_cannot_override_key() {
        let mut descriptor = UpsertDescriptor::insert(
            Collection::Beasts,
            document([("beast", DocValue::from(4u8))]),
            Document::new(),
        );
        assert!(descriptor.key_is_consistent());
        descriptor.update.insert("beast".into(), DocValue::from(5u8));
        assert!(!descriptor.key_is_consistent());
    }

    #[test]
    fn test_identity_drops_non_identity_key_fields() {
        let descriptor = UpsertDescriptor::insert(
            Collection::Adventurers,
            document([
                ("adventurerId", DocValue::numeric(7)),
                ("owner", DocValue::numeric(2748)),
            ]),
            Document::new(),
        );
        assert_eq!(
            descriptor.identity(),
            document([("adventurerId", DocValue::numeric(7))])
        );
        assert_eq!(descriptor.identity_json(), serde_json::json!({"adventurerId": "7"}));
        assert_eq!(descriptor.field("owner"), Some(&DocValue::numeric(2748)));
    }

    #[test]
    fn test_felt_is_decimal() {
        assert_eq!(
            DocValue::felt(U256::from(0xabcu64)),
            DocValue::Numeric("2748".into())
        );
        assert_eq!(DocValue::optional_id(0), DocValue::Null);
        assert_eq!(DocValue::optional_id(9), DocValue::Uint64(9));
    }

    #[test]
    fn test_json_shape() {
        let descriptor = UpsertDescriptor::insert(
            Collection::Entropy,
            document([("newHash", DocValue::numeric(1))]),
            document([
                ("blocksPerHour", DocValue::from(360u64)),
                ("seed", DocValue::numeric(u128::MAX)),
                ("slainOnTime", DocValue::Null),
            ]),
        );
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["collection"], "entropy");
        assert_eq!(json["mode"], "insert");
        assert_eq!(json["update"]["blocksPerHour"], 360);
        assert_eq!(json["update"]["seed"], u128::MAX.to_string());
        assert!(json["update"]["slainOnTime"].is_null());
        assert_eq!(descriptor.update_json(), json["update"]);
    }
}
