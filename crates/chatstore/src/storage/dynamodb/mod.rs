//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`TableStore`]
//! using `aws-sdk-dynamodb`. Messages and registry entities share one table
//! keyed by `PartitionKey` (hash) and `RowKey` (range); every other attribute
//! is a string.
//!
//! [`TableStore`]: chatstore_core::storage::TableStore

mod conversions;
mod error;
mod schema;
mod store;

pub use store::DynamoDbTableStore;
