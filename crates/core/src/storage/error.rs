use thiserror::Error;

/// Errors that can occur during table store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Remote store error: {0}")]
    RemoteStore(String),
    #[error("Table initialization failed: {0}")]
    TableInit(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for table store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_store_display() {
        let error = StoreError::RemoteStore("throughput exceeded".to_string());
        assert_eq!(error.to_string(), "Remote store error: throughput exceeded");
    }

    #[test]
    fn test_table_init_display() {
        let error = StoreError::TableInit("access denied".to_string());
        assert_eq!(
            error.to_string(),
            "Table initialization failed: access denied"
        );
    }

    #[test]
    fn test_connection_display() {
        let error = StoreError::Connection("invalid endpoint".to_string());
        assert_eq!(error.to_string(), "Connection failed: invalid endpoint");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = StoreError::InvalidData("Missing or invalid field: RowKey".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: RowKey"
        );
    }
}
