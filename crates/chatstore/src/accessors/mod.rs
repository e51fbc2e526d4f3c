//! Domain-shaped views over a [`ChatStore`].
//!
//! Each accessor is scoped to one logical entity and only exposes the
//! operations that make sense for it. Accessors borrow the chat store and are
//! cheap to create per call; obtain them from [`ChatStorageManager`].
//!
//! [`ChatStore`]: crate::ChatStore
//! [`ChatStorageManager`]: crate::ChatStorageManager

mod group;
mod public;
mod user;
mod user_groups;
mod users;

pub use group::GroupAccessor;
pub use public::PublicChatAccessor;
pub use user::UserAccessor;
pub use user_groups::UserGroupsAccessor;
pub use users::UsersAccessor;

/// Number of messages a conversation load returns when no count is given.
pub const DEFAULT_LOAD_COUNT: usize = 20;

fn load_count(count: Option<usize>) -> usize {
    count.unwrap_or(DEFAULT_LOAD_COUNT)
}
