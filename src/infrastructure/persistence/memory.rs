//! In-memory partition storage for development and testing

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Partition, PartitionDocument, PartitionStore};
use crate::shared::InfraResult;

/// Keeps serialized documents in a map, so a corrupt entry behaves like a
/// corrupt file would.
#[derive(Debug, Default)]
pub struct InMemoryPartitionStore {
    entries: DashMap<Partition, String>,
}

impl InMemoryPartitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under a partition, bypassing serialization.
    pub fn put_raw(&self, partition: Partition, raw: impl Into<String>) {
        self.entries.insert(partition, raw.into());
    }

    pub fn raw(&self, partition: Partition) -> Option<String> {
        self.entries.get(&partition).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PartitionStore for InMemoryPartitionStore {
    async fn load(&self, partition: Partition) -> InfraResult<Option<PartitionDocument>> {
        match self.entries.get(&partition) {
            Some(raw) => Ok(Some(serde_json::from_str(raw.value())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, partition: Partition, document: &PartitionDocument) -> InfraResult<()> {
        let raw = serde_json::to_string(document)?;
        self.entries.insert(partition, raw);
        Ok(())
    }

    async fn purge_all(&self) -> InfraResult<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemoryPartitionStore::new();
        let doc = PartitionDocument::new(json!({"appName": "NOC"}));
        store.save(Partition::Settings, &doc).await.unwrap();

        assert_eq!(store.load(Partition::Settings).await.unwrap(), Some(doc));
        assert_eq!(store.load(Partition::Olt).await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_entry_is_an_error() {
        let store = InMemoryPartitionStore::new();
        store.put_raw(Partition::Onu, "{not json");
        assert!(store.load(Partition::Onu).await.is_err());
    }

    #[tokio::test]
    async fn purge_clears_everything() {
        let store = InMemoryPartitionStore::new();
        for partition in Partition::ALL {
            store.save(partition, &PartitionDocument::new(json!({}))).await.unwrap();
        }
        assert_eq!(store.len(), 4);

        store.purge_all().await.unwrap();
        assert!(store.is_empty());
    }
}
