use std::env;

/// Environment variable holding the table store endpoint.
pub const ENDPOINT_ENV: &str = "CHAT_STORE_ENDPOINT";

/// Environment variable holding the chat table name.
pub const TABLE_NAME_ENV: &str = "CHAT_TABLE_NAME";

pub const DEFAULT_TABLE_NAME: &str = "chats";

/// Connection settings for the chat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatStoreConfig {
    /// Custom endpoint URL (for local DynamoDB). `None` uses the default
    /// endpoint resolution of the AWS SDK.
    pub endpoint_url: Option<String>,
    /// AWS region. `None` falls back to the default provider chain.
    pub region: Option<String>,
    /// Name of the table holding messages and registry entities.
    pub table_name: String,
}

impl ChatStoreConfig {
    /// Creates a configuration for `table_name` with default endpoint and region.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            endpoint_url: None,
            region: None,
            table_name: table_name.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHAT_STORE_ENDPOINT` - Table store endpoint URL (default: SDK resolution)
    /// - `CHAT_TABLE_NAME` - Chat table name (default: "chats")
    pub fn from_env() -> Self {
        Self {
            endpoint_url: env::var(ENDPOINT_ENV).ok().filter(|v| !v.trim().is_empty()),
            region: None,
            table_name: env::var(TABLE_NAME_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("{} at {}", self.table_name, url),
            None => format!("{} (default endpoint)", self.table_name),
        }
    }
}

impl Default for ChatStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = ChatStoreConfig::new("chat")
            .with_endpoint_url("http://localhost:8000")
            .with_region("eu-west-1")
            .with_table_name("history");

        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.table_name, "history");
    }

    #[test]
    fn test_default_table_name() {
        assert_eq!(ChatStoreConfig::default().table_name, "chats");
        assert_eq!(ChatStoreConfig::default().endpoint_url, None);
    }

    #[test]
    fn test_target_display() {
        let local = ChatStoreConfig::new("chats").with_endpoint_url("http://localhost:8000");
        assert_eq!(local.target_display(), "chats at http://localhost:8000");
        assert_eq!(
            ChatStoreConfig::new("chats").target_display(),
            "chats (default endpoint)"
        );
    }

    #[test]
    fn test_from_env() {
        // The only test that touches these variables.
        env::remove_var(ENDPOINT_ENV);
        env::remove_var(TABLE_NAME_ENV);

        let config = ChatStoreConfig::from_env();
        assert_eq!(config, ChatStoreConfig::default());

        env::set_var(ENDPOINT_ENV, "http://localhost:8000");
        env::set_var(TABLE_NAME_ENV, "history");

        let config = ChatStoreConfig::from_env();
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.table_name, "history");

        env::remove_var(ENDPOINT_ENV);
        env::remove_var(TABLE_NAME_ENV);
    }
}
