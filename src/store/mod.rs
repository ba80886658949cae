//! Document persistence.
//!
//! Backends store schemaless JSON documents grouped into named collections;
//! [`Repository`] layers typed access on top for each model.

pub mod memory;
pub mod postgres;

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// All documents of a collection in insertion order.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Inserts or replaces the document with this id.
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError>;

    /// Inserts only when no document with this id exists. Returns whether
    /// the document was written.
    async fn insert(&self, collection: &str, id: &str, document: Value) -> Result<bool, StoreError>;

    /// Atomically appends `items` to the top-level array `field` (created if
    /// absent) and merges `set` into the document. Returns `false` when the
    /// document does not exist.
    async fn append(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        items: Vec<Value>,
        set: Map<String, Value>,
    ) -> Result<bool, StoreError>;

    /// Up to `limit` documents, most recently written first.
    async fn recent(&self, collection: &str, limit: usize) -> Result<Vec<Value>, StoreError>;

    /// Returns whether a document was removed.
    async fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    fn backend_name(&self) -> &'static str;
}

pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.store
            .list(T::COLLECTION)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    pub async fn save(&self, document: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)?;
        self.store.put(T::COLLECTION, document.id(), value).await
    }

    pub async fn insert(&self, document: &T) -> Result<bool, StoreError> {
        let value = serde_json::to_value(document)?;
        self.store.insert(T::COLLECTION, document.id(), value).await
    }

    pub async fn append<I: Serialize>(
        &self,
        id: &str,
        field: &str,
        items: &[I],
        set: Map<String, Value>,
    ) -> Result<bool, StoreError> {
        let items = items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.store.append(T::COLLECTION, id, field, items, set).await
    }

    pub async fn recent(&self, limit: usize) -> Result<Vec<T>, StoreError> {
        self.store
            .recent(T::COLLECTION, limit)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store.remove(T::COLLECTION, id).await
    }
}
