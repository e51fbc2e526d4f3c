//! Entry point binding one chat store to the accessor facades.

use std::sync::Arc;

use chatstore_core::storage::TableStore;

use crate::accessors::{
    GroupAccessor, PublicChatAccessor, UserAccessor, UserGroupsAccessor, UsersAccessor,
};
use crate::ChatStore;

/// Namespace of accessors over one configured [`ChatStore`].
///
/// Holds nothing besides the shared chat store; clone it freely and reuse it
/// across calls.
pub struct ChatStorageManager<S: TableStore> {
    store: Arc<ChatStore<S>>,
}

impl<S: TableStore> Clone for ChatStorageManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TableStore> ChatStorageManager<S> {
    pub fn new(store: ChatStore<S>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a manager over a table store.
    pub fn from_store(table_store: S) -> Self {
        Self::new(ChatStore::from_store(table_store))
    }

    /// Get the underlying chat store.
    pub fn store(&self) -> &ChatStore<S> {
        &self.store
    }

    /// The user registry.
    pub fn users(&self) -> UsersAccessor<'_, S> {
        UsersAccessor::new(&self.store)
    }

    /// The broadcast channel.
    pub fn public(&self) -> PublicChatAccessor<'_, S> {
        PublicChatAccessor::new(&self.store)
    }

    /// Group memberships of every user.
    pub fn user_groups(&self) -> UserGroupsAccessor<'_, S> {
        UserGroupsAccessor::new(&self.store)
    }

    /// The conversation of `group`.
    pub fn group(&self, group: &str) -> GroupAccessor<'_, S> {
        GroupAccessor::new(&self.store, group)
    }

    /// The direct conversations of `user`.
    pub fn user(&self, user: &str) -> UserAccessor<'_, S> {
        UserAccessor::new(&self.store, user)
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use chatstore_core::storage::Result;

    use super::ChatStorageManager;
    use crate::config::ChatStoreConfig;
    use crate::storage::DynamoDbTableStore;

    impl ChatStorageManager<DynamoDbTableStore> {
        /// Creates a manager over the DynamoDB table described by `config`.
        pub async fn connect(config: &ChatStoreConfig) -> Result<Self> {
            let table_store = DynamoDbTableStore::connect(config).await?;
            tracing::info!(target_store = %config.target_display(), "Chat storage ready");
            Ok(Self::from_store(table_store))
        }

        /// Creates a manager from `CHAT_STORE_ENDPOINT` and `CHAT_TABLE_NAME`.
        pub async fn from_env() -> Result<Self> {
            Self::connect(&ChatStoreConfig::from_env()).await
        }
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use chatstore_core::keys::direct_chat_key;
    use chatstore_core::storage::Removal;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::storage::InMemoryTableStore;

    fn manager() -> ChatStorageManager<InMemoryTableStore> {
        ChatStorageManager::from_store(InMemoryTableStore::new())
    }

    #[tokio::test]
    async fn test_group_chat_round_trip() {
        let manager = manager();

        manager.group("team").add_chat("hi").await.unwrap();

        assert_eq!(manager.group("team").load(Some(5)).await.unwrap(), "[hi]");
    }

    #[tokio::test]
    async fn test_direct_chat_is_symmetric() {
        let manager = manager();

        let sent = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        manager
            .store()
            .add_chat_at(&direct_chat_key("alice", "bob"), "hey", sent)
            .await
            .unwrap();
        manager
            .store()
            .add_chat_at(
                &direct_chat_key("bob", "alice"),
                "hey yourself",
                sent + Duration::milliseconds(1),
            )
            .await
            .unwrap();

        let from_alice = manager.user("alice").load("bob", None).await.unwrap();
        let from_bob = manager.user("bob").load("alice", None).await.unwrap();
        assert_eq!(from_alice, "[hey,hey yourself]");
        assert_eq!(from_alice, from_bob);
    }

    #[tokio::test]
    async fn test_user_and_group_take_names_alike() {
        let manager = manager();
        let name = String::from("team");

        manager.group(&name).add_chat("for the group").await.unwrap();
        manager.user(&name).add_chat("alice", "for alice").await.unwrap();

        assert_eq!(manager.user(&name).name(), "team");
        assert_eq!(manager.group(&name).load(None).await.unwrap(), "[for the group]");
        assert_eq!(manager.user("alice").load("team", None).await.unwrap(), "[for alice]");
    }

    #[tokio::test]
    async fn test_registry_and_messages_share_one_table() {
        let manager = manager();

        manager.users().add("alice").await.unwrap();
        manager.user_groups().add("team", "alice").await.unwrap();
        manager.public().add_chat("welcome").await.unwrap();

        assert_eq!(manager.users().load(10).await.unwrap(), vec!["alice"]);
        assert_eq!(
            manager.user_groups().load("alice", 10).await.unwrap(),
            vec!["team"]
        );
        assert_eq!(manager.public().load(None).await.unwrap(), "[welcome]");
        assert_eq!(manager.group("team").load(None).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let manager = manager();
        let clone = manager.clone();

        clone.users().add("alice").await.unwrap();

        assert_eq!(manager.users().load(10).await.unwrap(), vec!["alice"]);
        assert_eq!(
            manager.users().remove("alice").await.unwrap(),
            Removal::Removed
        );
        assert_eq!(clone.users().remove("alice").await.unwrap(), Removal::NotFound);
    }
}
