//! In-memory document store: reference implementation and test double.

use super::{Collection, Document, DocumentStore, Filter, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use uuid::Uuid;

/// Collections held in insertion order; ids are assigned on insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a seed object: `{ "<collection>": [ {..}, .. ], .. }`.
    /// A document's `id` field, when present, becomes its store id.
    pub fn from_seed(seed: Value) -> Result<Self, StoreError> {
        let store = Self::new();
        let Value::Object(seed) = seed else {
            return Err(StoreError::Unavailable(
                "seed must be an object keyed by collection".to_string(),
            ));
        };
        for (name, docs) in seed {
            let collection =
                Collection::from_name(&name).ok_or(StoreError::UnknownCollection(name))?;
            let docs: Vec<Value> = serde_json::from_value(docs)?;
            for mut data in docs {
                let id = data
                    .as_object_mut()
                    .and_then(|fields| fields.remove("id"))
                    .and_then(|id| id.as_str().map(str::to_string));
                match id {
                    Some(id) => store.insert_with_id(collection, id, data)?,
                    None => {
                        store.insert(collection, data)?;
                    }
                }
            }
        }
        Ok(store)
    }

    /// Load a JSON seed file (see [`MemoryStore::from_seed`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_seed(serde_json::from_str(&raw)?)
    }

    /// Insert a document under a fresh id and return that id.
    pub fn insert(&self, collection: Collection, data: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        self.insert_with_id(collection, id.clone(), data)?;
        Ok(id)
    }

    /// Insert or replace the document with the given id.
    pub fn insert_with_id(
        &self,
        collection: Collection,
        id: impl Into<String>,
        data: Value,
    ) -> Result<(), StoreError> {
        let id = id.into();
        let mut g = self.collections.write().map_err(|_| poisoned())?;
        let docs = g.entry(collection).or_default();
        match docs.iter_mut().find(|d| d.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(Document { id, data }),
        }
        Ok(())
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .map(|g| g.get(&collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>, StoreError> {
        let g = self.collections.read().map_err(|_| poisoned())?;
        Ok(g.get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let g = self.collections.read().map_err(|_| poisoned())?;
        Ok(g.get(&collection).cloned().unwrap_or_default())
    }

    async fn query(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> Result<Vec<Document>, StoreError> {
        let g = self.collections.read().map_err(|_| poisoned())?;
        Ok(g.get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filters.iter().all(|f| f.matches(&d.data)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn seed_ids_are_kept_and_missing_ids_assigned() {
        let store = MemoryStore::from_seed(json!({
            "clubs": [
                { "id": "c1", "name": "Partizan" },
                { "name": "Crvena zvezda" }
            ]
        }))
        .unwrap();
        assert_eq!(store.count(Collection::Clubs), 2);
        let c1 = store.get(Collection::Clubs, "c1").await.unwrap().unwrap();
        assert_eq!(c1.data, json!({ "name": "Partizan" }));
        let all = store.get_all(Collection::Clubs).await.unwrap();
        assert!(!all[1].id.is_empty());
    }

    #[test]
    fn unknown_collection_is_rejected() {
        let err = MemoryStore::from_seed(json!({ "users": [] })).unwrap_err();
        assert!(matches!(err, StoreError::UnknownCollection(name) if name == "users"));
    }

    #[tokio::test]
    async fn query_applies_every_filter() {
        let store = MemoryStore::new();
        store
            .insert(Collection::Matches, json!({ "date": "2025-01-10", "stageId": "s1" }))
            .unwrap();
        store
            .insert(Collection::Matches, json!({ "date": "2025-01-12", "stageId": "s1" }))
            .unwrap();
        let found = store
            .query(
                Collection::Matches,
                &[Filter::eq("stageId", "s1"), Filter::lt("date", "2025-01-11")],
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data["date"], "2025-01-10");
    }
}
