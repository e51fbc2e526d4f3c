//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! table entities, and for shaping query expressions. These are testable in
//! isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chatstore_core::storage::{fields, Entity, EntityQuery, StoreError};

// ============================================================================
// Expression placeholders
// ============================================================================

pub const PARTITION_KEY_NAME: &str = "#pk";
pub const ROW_KEY_NAME: &str = "#rk";
pub const PARTITION_KEY_VALUE: &str = ":pk";

// ============================================================================
// Entity conversions
// ============================================================================

/// Convert an Entity to a DynamoDB item.
pub fn entity_to_item(entity: &Entity) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::with_capacity(entity.fields.len() + 2);

    // Keys
    item.insert(
        fields::PARTITION_KEY.to_string(),
        AttributeValue::S(entity.partition_key.clone()),
    );
    item.insert(
        fields::ROW_KEY.to_string(),
        AttributeValue::S(entity.row_key.clone()),
    );

    // Data
    for (name, value) in &entity.fields {
        item.insert(name.clone(), AttributeValue::S(value.clone()));
    }

    item
}

/// Convert a DynamoDB item to an Entity.
///
/// Number attributes are read back as their decimal string; any other
/// non-string attribute is rejected.
pub fn item_to_entity(item: &HashMap<String, AttributeValue>) -> Result<Entity, StoreError> {
    let mut entity = Entity::new(
        get_string(item, fields::PARTITION_KEY)?,
        get_string(item, fields::ROW_KEY)?,
    );

    for (name, value) in item {
        if name == fields::PARTITION_KEY || name == fields::ROW_KEY {
            continue;
        }
        let value = match value {
            AttributeValue::S(s) | AttributeValue::N(s) => s.clone(),
            _ => {
                return Err(StoreError::InvalidData(format!(
                    "Unsupported attribute type for field: {}",
                    name
                )))
            }
        };
        entity.fields.insert(name.clone(), value);
    }

    Ok(entity)
}

/// Convert the key pair of an entity to a DynamoDB key map.
pub fn key_to_item(partition_key: &str, row_key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            fields::PARTITION_KEY.to_string(),
            AttributeValue::S(partition_key.to_string()),
        ),
        (
            fields::ROW_KEY.to_string(),
            AttributeValue::S(row_key.to_string()),
        ),
    ])
}

// ============================================================================
// Query expressions
// ============================================================================

/// Expression pieces of a single-partition query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryExpression {
    pub key_condition: String,
    pub projection: Option<String>,
    pub attribute_names: HashMap<String, String>,
}

/// Build the key condition and projection for a query.
///
/// Every attribute goes through a `#name` placeholder so reserved words such
/// as `content` or `user` can be projected. The key pair is always projected.
pub fn query_expression(query: &EntityQuery) -> QueryExpression {
    let mut attribute_names = HashMap::from([(
        PARTITION_KEY_NAME.to_string(),
        fields::PARTITION_KEY.to_string(),
    )]);

    // DynamoDB rejects placeholders that no expression uses.
    let projection = query.columns().map(|columns| {
        attribute_names.insert(ROW_KEY_NAME.to_string(), fields::ROW_KEY.to_string());
        let mut names = vec![PARTITION_KEY_NAME.to_string(), ROW_KEY_NAME.to_string()];
        for (i, column) in columns.iter().enumerate() {
            let placeholder = format!("#c{i}");
            attribute_names.insert(placeholder.clone(), column.clone());
            names.push(placeholder);
        }
        names.join(", ")
    });

    QueryExpression {
        key_condition: format!("{PARTITION_KEY_NAME} = {PARTITION_KEY_VALUE}"),
        projection,
        attribute_names,
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}
