//! Chat history and group membership persistence over a partitioned table.
//!
//! The layers, outermost first:
//!
//! - [`ChatStorageManager`] binds one [`ChatStore`] to the accessor facades.
//! - The [`accessors`] expose `load`/`add`/`remove` scoped to one logical
//!   entity: the user registry, a direct conversation, a group, the broadcast
//!   channel, or a user's group memberships.
//! - [`ChatStore`] appends and reads back timestamped messages and manages
//!   registry entities, over any [`TableStore`].
//! - [`storage`] holds the table store backends.
//!
//! # Example
//!
//! ```rust,ignore
//! use chatstore::{storage::InMemoryTableStore, ChatStorageManager};
//!
//! let manager = ChatStorageManager::from_store(InMemoryTableStore::new());
//! manager.group("team").add_chat("hi").await?;
//! assert_eq!(manager.group("team").load(Some(5)).await?, "[hi]");
//! ```
//!
//! [`TableStore`]: chatstore_core::storage::TableStore

pub mod accessors;
mod chat_store;
pub mod config;
mod manager;
pub mod storage;

pub use chat_store::ChatStore;
pub use config::ChatStoreConfig;
pub use manager::ChatStorageManager;

pub use chatstore_core::chat::ChatMessage;
pub use chatstore_core::keys;
pub use chatstore_core::storage::{Entity, EntityQuery, Removal, Result, StoreError, TableStore};
