use chatstore_core::chat::ChatMessage;
use chatstore_core::keys::direct_chat_key;
use chatstore_core::storage::{Result, TableStore};

use super::load_count;
use crate::ChatStore;

/// The direct conversations of one user.
///
/// Both participants resolve to the same partition, so
/// `user("alice").load("bob", ..)` and `user("bob").load("alice", ..)` read
/// the same history.
pub struct UserAccessor<'a, S: TableStore> {
    store: &'a ChatStore<S>,
    user: String,
}

impl<'a, S: TableStore> UserAccessor<'a, S> {
    pub(crate) fn new(store: &'a ChatStore<S>, user: &str) -> Self {
        Self {
            store,
            user: user.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.user
    }

    /// Reads the latest messages exchanged with `recipient` as `[a,b,c]`,
    /// oldest first.
    ///
    /// `None` loads [`DEFAULT_LOAD_COUNT`](super::DEFAULT_LOAD_COUNT) messages.
    pub async fn load(&self, recipient: &str, count: Option<usize>) -> Result<String> {
        self.store
            .query_chat(&direct_chat_key(&self.user, recipient), load_count(count))
            .await
    }

    /// Reads the conversation with `recipient` as structured messages.
    pub async fn load_messages(
        &self,
        recipient: &str,
        count: Option<usize>,
    ) -> Result<Vec<ChatMessage>> {
        self.store
            .query_chat_messages(&direct_chat_key(&self.user, recipient), load_count(count))
            .await
    }

    /// Sends `content` to `recipient`.
    pub async fn add_chat(&self, recipient: &str, content: impl Into<String>) -> Result<ChatMessage> {
        self.store
            .add_chat(&direct_chat_key(&self.user, recipient), content)
            .await
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use chatstore_core::storage::EntityQuery;

    use super::*;
    use crate::storage::InMemoryTableStore;

    #[tokio::test]
    async fn test_both_directions_share_one_partition() {
        let chats = ChatStore::from_store(InMemoryTableStore::new());
        let alice = UserAccessor::new(&chats, "alice");
        let bob = UserAccessor::new(&chats, "bob");

        alice.add_chat("bob", "hello").await.unwrap();

        assert_eq!(bob.load("alice", None).await.unwrap(), "[hello]");
        assert_eq!(alice.load("bob", Some(1)).await.unwrap(), "[hello]");

        let stored = chats
            .table_store()
            .query_entities(&EntityQuery::partition("_chats_user_alice;bob"))
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_conversations_are_isolated() {
        let chats = ChatStore::from_store(InMemoryTableStore::new());
        let alice = UserAccessor::new(&chats, "alice");

        alice.add_chat("bob", "for bob").await.unwrap();

        assert_eq!(alice.load("carol", None).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_load_messages() {
        let chats = ChatStore::from_store(InMemoryTableStore::new());
        let alice = UserAccessor::new(&chats, "alice");

        let sent = alice.add_chat("bob", "hello").await.unwrap();

        assert_eq!(alice.load_messages("bob", None).await.unwrap(), vec![sent]);
        assert_eq!(alice.name(), "alice");
    }
}
