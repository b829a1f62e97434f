use std::fmt::{Display, Formatter};

use katalog_core::{api_models::CategoryMessageResponse, ids::CategoryId};
use katalog_database::QueryError;
use katalog_storage::BlobStoreError;
use thiserror::Error;
use tracing::error;


/// The category operations that can fail and get reported
/// to an [`OperationFailureSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryOperation {
    Create,
    Update,
    Delete,
}

impl CategoryOperation {
    pub const fn name(&self) -> &'static str {
        match self {
            CategoryOperation::Create => "create",
            CategoryOperation::Update => "update",
            CategoryOperation::Delete => "delete",
        }
    }

    pub const fn success_message(&self) -> &'static str {
        match self {
            CategoryOperation::Create => CategoryMessageResponse::CREATED,
            CategoryOperation::Update => CategoryMessageResponse::UPDATED,
            CategoryOperation::Delete => CategoryMessageResponse::DELETED,
        }
    }

    pub const fn failure_message(&self) -> &'static str {
        match self {
            CategoryOperation::Create => CategoryMessageResponse::CREATION_FAILED,
            CategoryOperation::Update => CategoryMessageResponse::UPDATE_FAILED,
            CategoryOperation::Delete => CategoryMessageResponse::DELETION_FAILED,
        }
    }
}

impl Display for CategoryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}



/// Anything that can go wrong inside a category mutation.
///
/// None of these are distinguished in API responses.
#[derive(Debug, Error)]
pub enum CategoryOperationError {
    #[error(transparent)]
    BlobStore(#[from] BlobStoreError),

    #[error(transparent)]
    Persistence(#[from] QueryError),

    #[error("category {} no longer exists", .category_id)]
    CategoryNoLongerExists { category_id: CategoryId },
}



/// Receives the error message of every category mutation that failed.
///
/// The server uses [`TracingFailureSink`]; tests can inject their own to
/// capture messages.
pub trait OperationFailureSink: Send + Sync {
    fn record_failure(&self, operation: CategoryOperation, message: &str);
}


/// Forwards failures to `tracing` at the error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFailureSink;

impl OperationFailureSink for TracingFailureSink {
    fn record_failure(&self, operation: CategoryOperation, message: &str) {
        error!(operation = operation.name(), "{message}");
    }
}
