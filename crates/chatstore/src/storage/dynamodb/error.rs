//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `chatstore_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::types::TableStatus;
use chatstore_core::storage::{Removal, Result, StoreError};

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    put_item_error(err.into_service_error())
}

fn put_item_error(err: PutItemError) -> StoreError {
    match err {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::RemoteStore("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::RemoteStore("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::RemoteStore("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::RemoteStore("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::RemoteStore("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::RemoteStore("DynamoDB internal server error".to_string())
        }
        err => StoreError::RemoteStore(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    query_error(err.into_service_error())
}

fn query_error(err: QueryError) -> StoreError {
    match err {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::RemoteStore("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::RemoteStore("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::RemoteStore("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::RemoteStore("DynamoDB internal server error".to_string())
        }
        err => StoreError::RemoteStore(format!("Query failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to a removal outcome.
///
/// A failed `attribute_exists` condition or a missing table both mean the
/// entity was not there; every other error is propagated.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> Result<Removal> {
    delete_item_error(err.into_service_error())
}

fn delete_item_error(err: DeleteItemError) -> Result<Removal> {
    match err {
        DeleteItemError::ConditionalCheckFailedException(_)
        | DeleteItemError::ResourceNotFoundException(_) => Ok(Removal::NotFound),
        DeleteItemError::ProvisionedThroughputExceededException(_) => Err(
            StoreError::RemoteStore("Throughput exceeded, please retry".to_string()),
        ),
        DeleteItemError::RequestLimitExceeded(_) => Err(StoreError::RemoteStore(
            "Request limit exceeded, please retry".to_string(),
        )),
        DeleteItemError::TransactionConflictException(_) => Err(StoreError::RemoteStore(
            "Transaction conflict, please retry".to_string(),
        )),
        DeleteItemError::InternalServerError(_) => Err(StoreError::RemoteStore(
            "DynamoDB internal server error".to_string(),
        )),
        err => Err(StoreError::RemoteStore(format!(
            "DeleteItem failed: {:?}",
            err
        ))),
    }
}

/// Map a DescribeTable SDK error.
///
/// Returns `Ok(None)` when the table does not exist.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> Result<Option<TableStatus>> {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => Ok(None),
        err => Err(StoreError::TableInit(format!(
            "DescribeTable failed: {:?}",
            err
        ))),
    }
}

/// Map a CreateTable SDK error.
///
/// A table that is already being created (or exists) is not an error.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> Result<()> {
    create_table_error(err.into_service_error())
}

fn create_table_error(err: CreateTableError) -> Result<()> {
    match err {
        CreateTableError::ResourceInUseException(_) => Ok(()),
        CreateTableError::LimitExceededException(_) => Err(StoreError::TableInit(
            "Table limit exceeded".to_string(),
        )),
        err => Err(StoreError::TableInit(format!(
            "CreateTable failed: {:?}",
            err
        ))),
    }
}
