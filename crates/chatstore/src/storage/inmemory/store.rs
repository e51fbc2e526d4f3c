//! In-memory table store implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use chatstore_core::storage::{Entity, EntityQuery, Removal, Result, StoreError, TableStore};

type Partition = BTreeMap<String, Entity>;

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    table: Arc<RwLock<Option<HashMap<String, Partition>>>>,
}

impl InMemoryTableStore {
    /// Creates a store whose table does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose table already exists.
    pub fn with_table() -> Self {
        Self {
            table: Arc::new(RwLock::new(Some(HashMap::new()))),
        }
    }

    /// Returns whether the table has been created.
    pub async fn table_exists(&self) -> bool {
        self.table.read().await.is_some()
    }

    /// Returns the number of entities stored in `partition_key`.
    pub async fn partition_len(&self, partition_key: &str) -> usize {
        self.table
            .read()
            .await
            .as_ref()
            .and_then(|table| table.get(partition_key))
            .map_or(0, BTreeMap::len)
    }
}

fn table_not_found() -> StoreError {
    StoreError::RemoteStore("Table not found".to_string())
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn create_table_if_not_exists(&self) -> Result<()> {
        let mut table = self.table.write().await;
        if table.is_none() {
            *table = Some(HashMap::new());
        }
        Ok(())
    }

    async fn insert_or_replace_entity(&self, entity: &Entity) -> Result<()> {
        let mut guard = self.table.write().await;
        let table = guard.as_mut().ok_or_else(table_not_found)?;
        table
            .entry(entity.partition_key.clone())
            .or_default()
            .insert(entity.row_key.clone(), entity.clone());
        Ok(())
    }

    async fn query_entities(&self, query: &EntityQuery) -> Result<Vec<Entity>> {
        let guard = self.table.read().await;
        let table = guard.as_ref().ok_or_else(table_not_found)?;

        let Some(partition) = table.get(query.partition_key()) else {
            return Ok(Vec::new());
        };

        let limit = query.limit().unwrap_or(usize::MAX);
        let entities: Box<dyn Iterator<Item = &Entity>> = if query.is_descending() {
            Box::new(partition.values().rev())
        } else {
            Box::new(partition.values())
        };

        Ok(entities
            .take(limit)
            .map(|entity| query.project(entity))
            .collect())
    }

    async fn delete_entity(&self, partition_key: &str, row_key: &str) -> Result<Removal> {
        let mut guard = self.table.write().await;
        let Some(table) = guard.as_mut() else {
            return Ok(Removal::NotFound);
        };

        let Some(partition) = table.get_mut(partition_key) else {
            return Ok(Removal::NotFound);
        };

        let removed = partition.remove(row_key).is_some();
        if partition.is_empty() {
            table.remove(partition_key);
        }

        Ok(if removed {
            Removal::Removed
        } else {
            Removal::NotFound
        })
    }
}
