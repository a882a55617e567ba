use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::DbError;
use super::sink::DocumentSink;
use super::types::{identity_of, to_json_object, Collection, Document, UpsertDescriptor, WriteMode};

/// In-process upsert-by-key store.
///
/// Documents are addressed by collection plus the JSON rendering of the
/// key's identity fields, with the same replace and merge rules as the
/// Postgres store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(Collection, String), Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn address(collection: Collection, key: &Document) -> (Collection, String) {
        (collection, to_json_object(&identity_of(collection, key)).to_string())
    }

    pub async fn get(&self, collection: Collection, key: &Document) -> Option<Document> {
        self.documents
            .lock()
            .await
            .get(&Self::address(collection, key))
            .cloned()
    }

    pub async fn count(&self, collection: Collection) -> usize {
        self.documents
            .lock()
            .await
            .keys()
            .filter(|(c, _)| *c == collection)
            .count()
    }

    /// All documents, sorted by address.
    pub async fn snapshot(&self) -> Vec<((Collection, String), Document)> {
        let mut docs: Vec<_> = self
            .documents
            .lock()
            .await
            .iter()
            .map(|(addr, doc)| (addr.clone(), doc.clone()))
            .collect();
        docs.sort_by(|a, b| a.0.cmp(&b.0));
        docs
    }
}

#[async_trait]
impl DocumentSink for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn apply(&self, _block_number: u64, batch: &[UpsertDescriptor]) -> Result<(), DbError> {
        let mut documents = self.documents.lock().await;
        for descriptor in batch {
            let address = (descriptor.collection, descriptor.identity_json().to_string());
            match descriptor.mode {
                WriteMode::Insert => {
                    documents.insert(address, descriptor.update.clone());
                }
                WriteMode::Update => {
                    documents
                        .entry(address)
                        .or_default()
                        .extend(descriptor.update.clone());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{document, DocValue};

    fn key() -> Document {
        document([("item", DocValue::from(3u8)), ("adventurerId", DocValue::numeric(7))])
    }

    #[tokio::test]
    async fn test_update_merges_and_insert_replaces() {
        let store = MemoryStore::new();
        store
            .apply(
                1,
                &[UpsertDescriptor::insert(
                    Collection::Items,
                    key(),
                    document([("xp", DocValue::from(0u16)), ("owner", DocValue::from(false))]),
                )],
            )
            .await
            .unwrap();
        store
            .apply(
                2,
                &[UpsertDescriptor::update(
                    Collection::Items,
                    key(),
                    document([("owner", DocValue::from(true))]),
                )],
            )
            .await
            .unwrap();

        let doc = store.get(Collection::Items, &key()).await.unwrap();
        assert_eq!(doc.get("owner"), Some(&DocValue::Bool(true)));
        assert_eq!(doc.get("xp"), Some(&DocValue::Uint64(0)));

        store
            .apply(
                3,
                &[UpsertDescriptor::insert(Collection::Items, key(), Document::new())],
            )
            .await
            .unwrap();
        let doc = store.get(Collection::Items, &key()).await.unwrap();
        assert_eq!(doc.get("owner"), None);
        assert_eq!(store.count(Collection::Items).await, 1);
    }

    #[tokio::test]
    async fn test_replay_is_idempotent() {
        let batch = vec![
            UpsertDescriptor::insert(
                Collection::Items,
                key(),
                document([("equipped", DocValue::from(false))]),
            ),
            UpsertDescriptor::update(
                Collection::Items,
                key(),
                document([("equipped", DocValue::from(true))]),
            ),
        ];
        let store = MemoryStore::new();
        store.apply(1, &batch).await.unwrap();
        let once = store.snapshot().await;
        store.apply(1, &batch).await.unwrap();
        assert_eq!(store.snapshot().await, once);
    }

    #[tokio::test]
    async fn test_wider_insert_key_hits_same_document() {
        let id = || ("adventurerId", DocValue::numeric(7));
        let store = MemoryStore::new();
        store
            .apply(
                1,
                &[
                    UpsertDescriptor::insert(
                        Collection::Adventurers,
                        document([id(), ("owner", DocValue::numeric(2748))]),
                        document([("name", DocValue::numeric(42))]),
                    ),
                    UpsertDescriptor::update(
                        Collection::Adventurers,
                        document([id()]),
                        document([("health", DocValue::from(80u16))]),
                    ),
                ],
            )
            .await
            .unwrap();

        assert_eq!(store.count(Collection::Adventurers).await, 1);
        let doc = store
            .get(Collection::Adventurers, &document([id()]))
            .await
            .unwrap();
        assert_eq!(doc.get("name"), Some(&DocValue::Numeric("42".into())));
        assert_eq!(doc.get("health"), Some(&DocValue::Uint64(80)));
    }
}
