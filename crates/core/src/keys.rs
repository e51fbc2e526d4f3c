//! Partition key composition.
//!
//! Pure functions mapping logical identities onto partition keys of the shared
//! chat table. Message partitions are prefixed `_chats_`, registry partitions
//! `_users` / `_usergroups_`; nothing else distinguishes the two entity kinds.

// ============================================================================
// Key prefixes
// ============================================================================

pub const DIRECT_CHAT_PREFIX: &str = "_chats_user_";
pub const GROUP_CHAT_PREFIX: &str = "_chats_group_";
pub const USER_GROUPS_PREFIX: &str = "_usergroups_";

/// Separator placed between the two participants of a direct conversation.
pub const PARTICIPANT_SEPARATOR: &str = ";";

/// Partition holding the broadcast channel messages.
pub const BROADCAST_CHAT_KEY: &str = "_chats_broadcast";

/// Partition holding one registry row per connected user.
pub const USERS_KEY: &str = "_users";

// ============================================================================
// Conversation keys
// ============================================================================

/// Generate the partition key for a 1:1 conversation.
///
/// Pattern: `_chats_user_<lesser>;<greater>`
///
/// Participants are sorted before joining, so both directions of the
/// conversation land in the same partition.
pub fn direct_chat_key(user_a: &str, user_b: &str) -> String {
    let (first, second) = if user_a <= user_b {
        (user_a, user_b)
    } else {
        (user_b, user_a)
    };
    format!("{DIRECT_CHAT_PREFIX}{first}{PARTICIPANT_SEPARATOR}{second}")
}

/// Generate the partition key for a group conversation.
///
/// Pattern: `_chats_group_<group>`
pub fn group_chat_key(group: &str) -> String {
    format!("{GROUP_CHAT_PREFIX}{group}")
}

// ============================================================================
// Registry keys
// ============================================================================

/// Generate the partition key listing the groups a user belongs to.
///
/// Pattern: `_usergroups_<user>`
pub fn user_groups_key(user: &str) -> String {
    format!("{USER_GROUPS_PREFIX}{user}")
}

/// A conversation identity, resolved to its partition with [`partition_key`].
///
/// [`partition_key`]: ConversationKey::partition_key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConversationKey {
    /// A direct conversation between two users, in either order.
    Direct { user: String, recipient: String },
    /// A named group conversation.
    Group(String),
    /// The broadcast channel every user sees.
    Broadcast,
}

impl ConversationKey {
    pub fn direct(user: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self::Direct {
            user: user.into(),
            recipient: recipient.into(),
        }
    }

    pub fn group(group: impl Into<String>) -> Self {
        Self::Group(group.into())
    }

    /// Returns the partition key this conversation is stored under.
    pub fn partition_key(&self) -> String {
        match self {
            Self::Direct { user, recipient } => direct_chat_key(user, recipient),
            Self::Group(group) => group_chat_key(group),
            Self::Broadcast => BROADCAST_CHAT_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_chat_key() {
        assert_eq!(direct_chat_key("alice", "bob"), "_chats_user_alice;bob");
    }

    #[test]
    fn test_direct_chat_key_is_order_independent() {
        let pairs = [
            ("alice", "bob"),
            ("Zed", "adam"),
            ("bob", "bob"),
            ("", "carol"),
            ("user10", "user9"),
        ];

        for (a, b) in pairs {
            assert_eq!(direct_chat_key(a, b), direct_chat_key(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_direct_chat_key_sorts_by_byte_order() {
        // Uppercase sorts before lowercase.
        assert_eq!(direct_chat_key("bob", "Alice"), "_chats_user_Alice;bob");
    }

    #[test]
    fn test_group_chat_key() {
        assert_eq!(group_chat_key("team"), "_chats_group_team");
    }

    #[test]
    fn test_user_groups_key() {
        assert_eq!(user_groups_key("alice"), "_usergroups_alice");
    }

    #[test]
    fn test_constants() {
        assert_eq!(BROADCAST_CHAT_KEY, "_chats_broadcast");
        assert_eq!(USERS_KEY, "_users");
    }

    #[test]
    fn test_conversation_key_partition_key() {
        assert_eq!(
            ConversationKey::direct("bob", "alice").partition_key(),
            direct_chat_key("alice", "bob")
        );
        assert_eq!(
            ConversationKey::group("team").partition_key(),
            "_chats_group_team"
        );
        assert_eq!(
            ConversationKey::Broadcast.partition_key(),
            "_chats_broadcast"
        );
    }

    #[test]
    fn test_message_and_registry_partitions_do_not_collide() {
        let message_keys = [
            direct_chat_key("_users", ""),
            group_chat_key("_users"),
            BROADCAST_CHAT_KEY.to_string(),
        ];
        for key in message_keys {
            assert!(key.starts_with("_chats_"));
            assert_ne!(key, USERS_KEY);
            assert!(!key.starts_with(USER_GROUPS_PREFIX));
        }
    }
}
