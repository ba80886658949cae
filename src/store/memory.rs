use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};

use super::{DocumentStore, StoreError};

struct Entry {
    id: String,
    body: Value,
    /// Write sequence number; higher is more recent.
    written: u64,
}

/// Process-local store used for `memory://` and in tests. Contents are lost
/// on restart.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Entry>>,
    clock: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|entry| entry.id == id)
                .map(|entry| entry.body.clone())
        }))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.iter().map(|entry| entry.body.clone()).collect())
            .unwrap_or_default())
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        let written = self.tick();
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.body = document;
                entry.written = written;
            }
            None => docs.push(Entry {
                id: id.to_string(),
                body: document,
                written,
            }),
        }
        Ok(())
    }

    async fn insert(&self, collection: &str, id: &str, document: Value) -> Result<bool, StoreError> {
        let written = self.tick();
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|entry| entry.id == id) {
            return Ok(false);
        }
        docs.push(Entry {
            id: id.to_string(),
            body: document,
            written,
        });
        Ok(true)
    }

    async fn append(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        items: Vec<Value>,
        set: Map<String, Value>,
    ) -> Result<bool, StoreError> {
        let written = self.tick();
        // The shard guard is held for the whole read-modify-write.
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(entry) = docs.iter_mut().find(|entry| entry.id == id) else {
            return Ok(false);
        };
        let Value::Object(body) = &mut entry.body else {
            return Ok(false);
        };

        match body.get_mut(field) {
            Some(Value::Array(existing)) => existing.extend(items),
            _ => {
                body.insert(field.to_string(), Value::Array(items));
            }
        }
        body.extend(set);
        entry.written = written;
        Ok(true)
    }

    async fn recent(&self, collection: &str, limit: usize) -> Result<Vec<Value>, StoreError> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        let mut entries: Vec<&Entry> = docs.iter().collect();
        entries.sort_by(|a, b| b.written.cmp(&a.written));
        Ok(entries
            .into_iter()
            .take(limit)
            .map(|entry| entry.body.clone())
            .collect())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|entry| entry.id != id);
        Ok(docs.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
