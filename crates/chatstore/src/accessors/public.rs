use chatstore_core::chat::ChatMessage;
use chatstore_core::keys::BROADCAST_CHAT_KEY;
use chatstore_core::storage::{Result, TableStore};

use super::load_count;
use crate::ChatStore;

/// The broadcast channel.
pub struct PublicChatAccessor<'a, S: TableStore> {
    store: &'a ChatStore<S>,
}

impl<'a, S: TableStore> PublicChatAccessor<'a, S> {
    pub(crate) fn new(store: &'a ChatStore<S>) -> Self {
        Self { store }
    }

    pub async fn load(&self, count: Option<usize>) -> Result<String> {
        self.store
            .query_chat(BROADCAST_CHAT_KEY, load_count(count))
            .await
    }

    pub async fn load_messages(&self, count: Option<usize>) -> Result<Vec<ChatMessage>> {
        self.store
            .query_chat_messages(BROADCAST_CHAT_KEY, load_count(count))
            .await
    }

    pub async fn add_chat(&self, content: impl Into<String>) -> Result<ChatMessage> {
        self.store.add_chat(BROADCAST_CHAT_KEY, content).await
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use crate::storage::InMemoryTableStore;

    #[tokio::test]
    async fn test_broadcast_round() {
        let chats = ChatStore::from_store(InMemoryTableStore::new());
        let public = PublicChatAccessor::new(&chats);

        let sent = public.add_chat("hello everyone").await.unwrap();

        assert_eq!(public.load(None).await.unwrap(), "[hello everyone]");
        assert_eq!(public.load_messages(Some(1)).await.unwrap(), vec![sent]);
        assert_eq!(chats.table_store().partition_len("_chats_broadcast").await, 1);
    }
}
