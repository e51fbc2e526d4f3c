use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{fields, Entity, StoreError};

/// A chat message as read back from a conversation partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// ISO-8601 send time, identical to the entity row key.
    pub sent_time: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(sent_time: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sent_time: sent_time.into(),
            content: content.into(),
        }
    }

    /// Reads a message out of a stored entity.
    ///
    /// Fails when either `sentTime` or `content` is missing.
    pub fn from_entity(entity: &Entity) -> Result<Self, StoreError> {
        let field = |name: &str| {
            entity.field(name).map(str::to_string).ok_or_else(|| {
                StoreError::InvalidData(format!("Missing or invalid field: {}", name))
            })
        };

        Ok(Self {
            sent_time: field(fields::SENT_TIME)?,
            content: field(fields::CONTENT)?,
        })
    }
}

/// Renders an instant the way message row keys are written.
///
/// Pattern: `YYYY-MM-DDTHH:MM:SS.mmmZ` (fixed width, so string order is
/// chronological order).
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Builds the entity stored for one message.
///
/// The send time doubles as the row key, so two messages sent within the same
/// millisecond to the same conversation share a key and the later write wins.
pub fn message_entity(conversation_key: &str, message: &ChatMessage) -> Entity {
    Entity::new(conversation_key, message.sent_time.clone())
        .with_field(fields::SENT_TIME, message.sent_time.clone())
        .with_field(fields::CONTENT, message.content.clone())
}
