//! Table schema and lazy table creation.

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client;
use chatstore_core::storage::{fields, Result, StoreError};

use super::error::{map_create_table_error, map_describe_table_error};

const MAX_ACTIVATION_ATTEMPTS: u32 = 30;
const ACTIVATION_POLL_DELAY: Duration = Duration::from_secs(1);

/// Creates the chat table unless it already exists, then waits for it to
/// become active.
pub async fn ensure_table(client: &Client, table_name: &str) -> Result<()> {
    if table_status(client, table_name).await? == Some(TableStatus::Active) {
        return Ok(());
    }

    create_table(client, table_name).await?;
    wait_for_table_active(client, table_name).await
}

/// Fetches the table status, returns None if the table doesn't exist.
async fn table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => Ok(response
            .table()
            .and_then(|table| table.table_status())
            .cloned()),
        Err(err) => map_describe_table_error(err),
    }
}

async fn create_table(client: &Client, table_name: &str) -> Result<()> {
    let key_schema = vec![
        key_schema_element(fields::PARTITION_KEY, KeyType::Hash)?,
        key_schema_element(fields::ROW_KEY, KeyType::Range)?,
    ];
    let attribute_definitions = vec![
        string_attribute(fields::PARTITION_KEY)?,
        string_attribute(fields::ROW_KEY)?,
    ];

    tracing::debug!(table = table_name, "Creating chat table");

    match client
        .create_table()
        .table_name(table_name)
        .set_key_schema(Some(key_schema))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
    {
        Ok(_) => Ok(()),
        Err(err) => map_create_table_error(err),
    }
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..MAX_ACTIVATION_ATTEMPTS {
        if table_status(client, table_name).await? == Some(TableStatus::Active) {
            tracing::debug!(table = table_name, "Chat table active");
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_POLL_DELAY).await;
    }

    Err(StoreError::TableInit(format!(
        "Timeout waiting for table '{table_name}' to become active"
    )))
}

fn key_schema_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| StoreError::TableInit(e.to_string()))
}

fn string_attribute(name: &str) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| StoreError::TableInit(e.to_string()))
}
