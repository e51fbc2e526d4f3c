use chrono::{DateTime, Utc};

use chatstore_core::chat::format_timestamp;
use chatstore_core::keys::user_groups_key;
use chatstore_core::storage::{fields, Entity, Removal, Result, TableStore};

use crate::ChatStore;

/// Group memberships, indexed per user.
pub struct UserGroupsAccessor<'a, S: TableStore> {
    store: &'a ChatStore<S>,
}

impl<'a, S: TableStore> UserGroupsAccessor<'a, S> {
    pub(crate) fn new(store: &'a ChatStore<S>) -> Self {
        Self { store }
    }

    /// Returns up to `count` names of the groups `user` belongs to, ascending.
    pub async fn load(&self, user: &str, count: usize) -> Result<Vec<String>> {
        self.store
            .query_entity(&user_groups_key(user), fields::GROUP, count)
            .await
    }

    /// Adds `user` to `group`, stamping the current time as the join time.
    pub async fn add(&self, group: &str, user: &str) -> Result<()> {
        self.add_at(group, user, Utc::now()).await
    }

    /// Adds `user` to `group` with an explicit join time.
    pub async fn add_at(&self, group: &str, user: &str, joined_time: DateTime<Utc>) -> Result<()> {
        let entity = Entity::new(user_groups_key(user), group)
            .with_field(fields::USER, user)
            .with_field(fields::JOINED_TIME, format_timestamp(joined_time))
            .with_field(fields::GROUP, group);

        self.store.update_entity(&entity).await
    }

    /// Removes `user` from `group`; a missing membership is reported as
    /// [`Removal::NotFound`].
    pub async fn remove(&self, group: &str, user: &str) -> Result<Removal> {
        self.store.remove_entity(&user_groups_key(user), group).await
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use chatstore_core::storage::EntityQuery;
    use chrono::TimeZone;

    use super::*;
    use crate::chat_store::test_support::{remote_error, FailingStore};
    use crate::storage::InMemoryTableStore;

    fn chat_store() -> ChatStore<InMemoryTableStore> {
        ChatStore::from_store(InMemoryTableStore::new())
    }

    #[tokio::test]
    async fn test_add_then_load_includes_group() {
        let chats = chat_store();
        let memberships = UserGroupsAccessor::new(&chats);

        memberships.add("team", "alice").await.unwrap();
        memberships.add("book-club", "alice").await.unwrap();
        memberships.add("team", "bob").await.unwrap();

        assert_eq!(
            memberships.load("alice", 10).await.unwrap(),
            vec!["book-club", "team"]
        );
        assert_eq!(memberships.load("bob", 10).await.unwrap(), vec!["team"]);
    }

    #[tokio::test]
    async fn test_remove_then_load_excludes_group() {
        let chats = chat_store();
        let memberships = UserGroupsAccessor::new(&chats);

        memberships.add("team", "alice").await.unwrap();
        memberships.add("book-club", "alice").await.unwrap();

        assert_eq!(
            memberships.remove("team", "alice").await.unwrap(),
            Removal::Removed
        );
        assert_eq!(
            memberships.load("alice", 10).await.unwrap(),
            vec!["book-club"]
        );
    }

    #[tokio::test]
    async fn test_remove_nonexistent_is_not_an_error() {
        let chats = chat_store();
        let memberships = UserGroupsAccessor::new(&chats);

        assert_eq!(
            memberships.remove("team", "alice").await.unwrap(),
            Removal::NotFound
        );
    }

    #[tokio::test]
    async fn test_remove_propagates_remote_errors() {
        let chats = ChatStore::from_store(FailingStore);
        let memberships = UserGroupsAccessor::new(&chats);

        assert_eq!(
            memberships.remove("team", "alice").await,
            Err(remote_error())
        );
    }

    #[tokio::test]
    async fn test_membership_entity_layout() {
        let chats = chat_store();
        let memberships = UserGroupsAccessor::new(&chats);
        let joined = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        memberships.add_at("team", "alice", joined).await.unwrap();

        let entities = chats
            .table_store()
            .query_entities(&EntityQuery::partition("_usergroups_alice"))
            .await
            .unwrap();
        assert_eq!(
            entities,
            vec![Entity::new("_usergroups_alice", "team")
                .with_field("user", "alice")
                .with_field("joinedTime", "2024-01-15T10:30:00.000Z")
                .with_field("group", "team")]
        );
    }
}
