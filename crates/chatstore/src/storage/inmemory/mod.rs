//! In-memory table store for testing.
//!
//! This module provides an in-memory implementation of [`TableStore`] that
//! keeps every partition in an ordered map wrapped in `Arc<RwLock<_>>`. It
//! behaves like the remote table: reads and writes fail until the table has
//! been created, rows come back in row key order, and key pairs are upserted.
//!
//! # Example
//!
//! ```rust,ignore
//! use chatstore::storage::inmemory::InMemoryTableStore;
//!
//! let store = InMemoryTableStore::new();
//! // Use store for testing...
//! ```
//!
//! [`TableStore`]: chatstore_core::storage::TableStore

mod store;

pub use store::InMemoryTableStore;
