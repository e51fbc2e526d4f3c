use chatstore_core::chat::ChatMessage;
use chatstore_core::keys::group_chat_key;
use chatstore_core::storage::{Result, TableStore};

use super::load_count;
use crate::ChatStore;

/// The conversation of one group.
pub struct GroupAccessor<'a, S: TableStore> {
    store: &'a ChatStore<S>,
    chat_key: String,
}

impl<'a, S: TableStore> GroupAccessor<'a, S> {
    pub(crate) fn new(store: &'a ChatStore<S>, group: &str) -> Self {
        Self {
            store,
            chat_key: group_chat_key(group),
        }
    }

    /// Reads the latest messages of the group as `[a,b,c]`, oldest first.
    ///
    /// `None` loads [`DEFAULT_LOAD_COUNT`](super::DEFAULT_LOAD_COUNT) messages.
    pub async fn load(&self, count: Option<usize>) -> Result<String> {
        self.store.query_chat(&self.chat_key, load_count(count)).await
    }

    pub async fn load_messages(&self, count: Option<usize>) -> Result<Vec<ChatMessage>> {
        self.store
            .query_chat_messages(&self.chat_key, load_count(count))
            .await
    }

    pub async fn add_chat(&self, content: impl Into<String>) -> Result<ChatMessage> {
        self.store.add_chat(&self.chat_key, content).await
    }
}
