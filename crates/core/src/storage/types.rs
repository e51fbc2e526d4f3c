use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names of the fields written alongside the key pair.
pub mod fields {
    pub const PARTITION_KEY: &str = "PartitionKey";
    pub const ROW_KEY: &str = "RowKey";

    // Message entities
    pub const SENT_TIME: &str = "sentTime";
    pub const CONTENT: &str = "content";

    // Registry entities
    pub const USER: &str = "user";
    pub const CONNECT_TIME: &str = "connectTime";
    pub const GROUP: &str = "group";
    pub const JOINED_TIME: &str = "joinedTime";
}

/// A record of the shared table, addressed by its partition/row key pair.
///
/// `(partition_key, row_key)` is unique within the table: writing an entity
/// with an existing pair replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub partition_key: String,
    pub row_key: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Entity {
    /// Creates an entity with no fields besides its keys.
    pub fn new(partition_key: impl Into<String>, row_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a string field, replacing any previous value under that name.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A single-partition query: equality on the partition key, an optional
/// projection and an optional top-N limit.
///
/// Entities come back in ascending row-key order unless
/// [`newest_first`](Self::newest_first) is set, in which case the limit keeps
/// the highest row keys. Built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    partition_key: String,
    select: Option<Vec<String>>,
    top: Option<usize>,
    descending: bool,
}

impl EntityQuery {
    /// Starts a query over every entity of `partition_key`.
    pub fn partition(partition_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            select: None,
            top: None,
            descending: false,
        }
    }

    /// Restricts the returned fields to `columns`. Keys are always returned.
    pub fn select<I, T>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.select = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Returns at most `count` entities.
    pub fn top(mut self, count: usize) -> Self {
        self.top = Some(count);
        self
    }

    /// Reads the partition in descending row-key order.
    pub fn newest_first(mut self) -> Self {
        self.descending = true;
        self
    }

    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// The projected columns, or `None` when every field is requested.
    pub fn columns(&self) -> Option<&[String]> {
        self.select.as_deref()
    }

    pub fn limit(&self) -> Option<usize> {
        self.top
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Returns a copy of `entity` holding only the projected fields.
    pub fn project(&self, entity: &Entity) -> Entity {
        match &self.select {
            None => entity.clone(),
            Some(columns) => Entity {
                partition_key: entity.partition_key.clone(),
                row_key: entity.row_key.clone(),
                fields: entity
                    .fields
                    .iter()
                    .filter(|(name, _)| columns.contains(name))
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
            },
        }
    }
}

/// Outcome of deleting an entity by key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The entity existed and was deleted.
    Removed,
    /// No entity with that key pair existed.
    NotFound,
}

impl Removal {
    pub fn was_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}
