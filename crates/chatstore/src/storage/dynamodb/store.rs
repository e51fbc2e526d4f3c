//! DynamoDB table store implementation.
//!
//! Implements the `TableStore` trait from `chatstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

use chatstore_core::storage::{
    fields, Entity, EntityQuery, Removal, Result, StoreError, TableStore,
};

use super::conversions::{
    entity_to_item, item_to_entity, key_to_item, query_expression, PARTITION_KEY_NAME,
    PARTITION_KEY_VALUE,
};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error};
use super::schema;
use crate::config::ChatStoreConfig;

/// DynamoDB-based table store.
///
/// Retries and backoff are left to the SDK client's retry configuration.
pub struct DynamoDbTableStore {
    client: Client,
    table_name: String,
    table_ready: OnceCell<()>,
}

impl DynamoDbTableStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            table_ready: OnceCell::new(),
        }
    }

    /// Creates a new store from explicit configuration.
    ///
    /// Credentials (and the region, unless configured) come from the AWS SDK
    /// default provider chain.
    pub async fn connect(config: &ChatStoreConfig) -> Result<Self> {
        if config.table_name.trim().is_empty() {
            return Err(StoreError::Connection(
                "Table name must not be empty".to_string(),
            ));
        }

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &config.region {
            sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region.clone()));
        }

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        tracing::debug!(target_store = %config.target_display(), "DynamoDB client configured");

        Ok(Self::new(Client::new(&sdk_config), config.table_name.clone()))
    }

    /// Creates a new store from environment configuration.
    ///
    /// See [`ChatStoreConfig::from_env`] for the variables read.
    pub async fn from_env() -> Result<Self> {
        Self::connect(&ChatStoreConfig::from_env()).await
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TableStore for DynamoDbTableStore {
    async fn create_table_if_not_exists(&self) -> Result<()> {
        self.table_ready
            .get_or_try_init(|| schema::ensure_table(&self.client, &self.table_name))
            .await?;
        Ok(())
    }

    async fn insert_or_replace_entity(&self, entity: &Entity) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(entity_to_item(entity)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn query_entities(&self, query: &EntityQuery) -> Result<Vec<Entity>> {
        let expression = query_expression(query);
        let limit = query.limit();
        let mut entities = Vec::new();
        let mut exclusive_start_key = None;

        // Pages stop at 1 MB; follow continuation keys until the limit is met.
        loop {
            let remaining = limit.map(|limit| limit.saturating_sub(entities.len()));
            if remaining == Some(0) {
                break;
            }

            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(&expression.key_condition)
                .set_projection_expression(expression.projection.clone())
                .set_expression_attribute_names(Some(expression.attribute_names.clone()))
                .expression_attribute_values(
                    PARTITION_KEY_VALUE,
                    AttributeValue::S(query.partition_key().to_string()),
                )
                .scan_index_forward(!query.is_descending())
                .set_limit(remaining.map(|n| i32::try_from(n).unwrap_or(i32::MAX)))
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            let items = result.items.unwrap_or_default();
            for item in &items {
                entities.push(item_to_entity(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        if let Some(limit) = limit {
            entities.truncate(limit);
        }

        Ok(entities)
    }

    async fn delete_entity(&self, partition_key: &str, row_key: &str) -> Result<Removal> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(partition_key, row_key)))
            .condition_expression(format!("attribute_exists({PARTITION_KEY_NAME})"))
            .expression_attribute_names(PARTITION_KEY_NAME, fields::PARTITION_KEY)
            .send()
            .await;

        match result {
            Ok(_) => Ok(Removal::Removed),
            Err(err) => map_delete_item_error(err),
        }
    }
}
