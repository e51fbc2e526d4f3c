//! Table store backend implementations.
//!
//! This module provides concrete implementations of the [`TableStore`] trait
//! defined in `chatstore_core::storage`. Backends are selected via feature
//! flags; both can be compiled in at once since every consumer is generic over
//! the trait.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory backend for tests and local development
//!
//! # Examples
//!
//! Build with DynamoDB only:
//! ```bash
//! cargo build -p chatstore --no-default-features --features dynamodb
//! ```
//!
//! [`TableStore`]: chatstore_core::storage::TableStore

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryTableStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTableStore;
