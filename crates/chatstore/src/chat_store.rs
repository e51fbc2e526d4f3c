//! Chat message and registry entity operations over a [`TableStore`].

use std::sync::Arc;

use chrono::{DateTime, Utc};

use chatstore_core::chat::{
    format_timestamp, join_contents, message_entity, sort_chronologically, ChatMessage,
};
use chatstore_core::storage::{
    fields, Entity, EntityQuery, Removal, Result, StoreError, TableStore,
};

/// Reads and writes chat messages and registry entities in one table.
///
/// The table is created lazily: every read and write path first makes sure it
/// exists. Nothing is cached; every call goes to the store.
pub struct ChatStore<S: TableStore> {
    store: Arc<S>,
}

impl<S: TableStore> ChatStore<S> {
    /// Creates a chat store over a shared table store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a chat store that owns its table store.
    pub fn from_store(store: S) -> Self {
        Self::new(Arc::new(store))
    }

    /// Get the underlying table store.
    pub fn table_store(&self) -> &S {
        &self.store
    }

    async fn ensure_table(&self) -> Result<()> {
        self.store
            .create_table_if_not_exists()
            .await
            .map_err(|err| match err {
                StoreError::TableInit(_) => err,
                other => StoreError::TableInit(other.to_string()),
            })
    }

    /// Reads the latest `count` messages of a conversation, oldest first.
    pub async fn query_chat_messages(
        &self,
        conversation_key: &str,
        count: usize,
    ) -> Result<Vec<ChatMessage>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let query = EntityQuery::partition(conversation_key)
            .select([fields::SENT_TIME, fields::CONTENT])
            .top(count)
            .newest_first();

        self.ensure_table().await?;
        let entities = self.store.query_entities(&query).await?;

        let mut messages = entities
            .iter()
            .map(ChatMessage::from_entity)
            .collect::<Result<Vec<_>>>()?;
        sort_chronologically(&mut messages);

        tracing::trace!(
            partition_key = conversation_key,
            count,
            returned = messages.len(),
            "Loaded chat messages"
        );

        Ok(messages)
    }

    /// Reads up to `count` messages of a conversation as `[a,b,c]`.
    ///
    /// Contents are joined verbatim; see [`join_contents`].
    pub async fn query_chat(&self, conversation_key: &str, count: usize) -> Result<String> {
        let messages = self.query_chat_messages(conversation_key, count).await?;
        Ok(join_contents(&messages))
    }

    /// Appends a message to a conversation, stamped with the current time.
    pub async fn add_chat(
        &self,
        conversation_key: &str,
        content: impl Into<String>,
    ) -> Result<ChatMessage> {
        self.add_chat_at(conversation_key, content, Utc::now()).await
    }

    /// Appends a message to a conversation with an explicit send time.
    ///
    /// A message already stored under the same send time is replaced.
    pub async fn add_chat_at(
        &self,
        conversation_key: &str,
        content: impl Into<String>,
        sent_time: DateTime<Utc>,
    ) -> Result<ChatMessage> {
        let message = ChatMessage::new(format_timestamp(sent_time), content);

        self.ensure_table().await?;
        self.store
            .insert_or_replace_entity(&message_entity(conversation_key, &message))
            .await?;

        tracing::debug!(
            partition_key = conversation_key,
            row_key = %message.sent_time,
            "Chat message added"
        );

        Ok(message)
    }

    /// Reads one column of up to `count` entities of a partition, sorted
    /// ascending.
    ///
    /// Entities without that column are skipped.
    pub async fn query_entity(
        &self,
        partition_key: &str,
        column: &str,
        count: usize,
    ) -> Result<Vec<String>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let query = EntityQuery::partition(partition_key)
            .select([column])
            .top(count);

        self.ensure_table().await?;
        let entities = self.store.query_entities(&query).await?;

        let mut values: Vec<String> = entities
            .iter()
            .filter_map(|entity| {
                let value = entity.field(column);
                if value.is_none() {
                    tracing::warn!(
                        partition_key,
                        row_key = %entity.row_key,
                        column,
                        "Entity is missing the requested column"
                    );
                }
                value.map(str::to_string)
            })
            .collect();
        values.sort();

        tracing::trace!(partition_key, column, returned = values.len(), "Loaded entities");

        Ok(values)
    }

    /// Inserts or replaces a registry entity.
    pub async fn update_entity(&self, entity: &Entity) -> Result<()> {
        self.ensure_table().await?;
        self.store.insert_or_replace_entity(entity).await?;

        tracing::debug!(
            partition_key = %entity.partition_key,
            row_key = %entity.row_key,
            "Entity updated"
        );

        Ok(())
    }

    /// Deletes the entity with the given key pair.
    ///
    /// An absent entity is reported as [`Removal::NotFound`], not as an error.
    pub async fn remove_entity(&self, partition_key: &str, row_key: &str) -> Result<Removal> {
        let removal = self.store.delete_entity(partition_key, row_key).await?;

        tracing::debug!(partition_key, row_key, ?removal, "Entity removed");

        Ok(removal)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use chatstore_core::storage::{Entity, EntityQuery, Removal, Result, StoreError, TableStore};

    /// Table store that fails every operation with a remote error.
    pub struct FailingStore;

    pub fn remote_error() -> StoreError {
        StoreError::RemoteStore("connection reset".to_string())
    }

    #[async_trait]
    impl TableStore for FailingStore {
        async fn create_table_if_not_exists(&self) -> Result<()> {
            Ok(())
        }

        async fn insert_or_replace_entity(&self, _entity: &Entity) -> Result<()> {
            Err(remote_error())
        }

        async fn query_entities(&self, _query: &EntityQuery) -> Result<Vec<Entity>> {
            Err(remote_error())
        }

        async fn delete_entity(&self, _partition_key: &str, _row_key: &str) -> Result<Removal> {
            Err(remote_error())
        }
    }
}
