use async_trait::async_trait;

use super::{Entity, EntityQuery, Removal, Result};

/// Gateway to the remote table holding chat and registry entities.
///
/// Implementations issue exactly one remote operation per call and add no
/// retry logic of their own; resilience belongs to the underlying client.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Creates the table if it does not exist yet.
    ///
    /// Calling this on an existing table is a no-op.
    async fn create_table_if_not_exists(&self) -> Result<()>;

    /// Inserts the entity, replacing any entity with the same key pair.
    async fn insert_or_replace_entity(&self, entity: &Entity) -> Result<()>;

    /// Returns the entities of one partition, in row key order.
    ///
    /// Only the fields named by the query projection are populated; the key
    /// pair is always present. At most `query.limit()` entities are returned.
    async fn query_entities(&self, query: &EntityQuery) -> Result<Vec<Entity>>;

    /// Deletes the entity with the given key pair.
    async fn delete_entity(&self, partition_key: &str, row_key: &str) -> Result<Removal>;
}
