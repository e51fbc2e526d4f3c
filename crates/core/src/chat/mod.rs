mod sorting;
mod types;

pub use sorting::{join_contents, sort_chronologically};
pub use types::{format_timestamp, message_entity, ChatMessage};
