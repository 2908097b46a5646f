use crate::api::envelope::Page;
use crate::api::models::RecordId;
use crate::core::context::RequestContext;
use crate::core::query_state::QueryState;
use crate::core::services::types::ServiceError;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for services that can list resources page by page
#[async_trait]
pub trait ListService<T, F>: Send + Sync {
    /// Fetch one page matching the query
    async fn list(
        &self,
        context: &RequestContext,
        query: &QueryState<F>,
    ) -> Result<Page<T>, ServiceError>;
}

/// Trait for services that can retrieve individual resources
#[async_trait]
pub trait GetService<T>: Send + Sync {
    /// Get a single resource by ID
    async fn get(&self, context: &RequestContext, id: &RecordId) -> Result<T, ServiceError>;
}

/// Trait for services that can create resources
#[async_trait]
pub trait CreateService<T>: Send + Sync {
    /// Create a new resource
    async fn create(&self, context: &RequestContext, payload: &Value) -> Result<T, ServiceError>;
}

/// Trait for services that can update resources
#[async_trait]
pub trait UpdateService<T>: Send + Sync {
    /// Update an existing resource
    async fn update(
        &self,
        context: &RequestContext,
        id: &RecordId,
        payload: &Value,
    ) -> Result<T, ServiceError>;
}

/// Trait for services that can delete resources
#[async_trait]
pub trait DeleteService: Send + Sync {
    /// Delete a resource by ID
    async fn delete(&self, context: &RequestContext, id: &RecordId) -> Result<(), ServiceError>;
}

/// Trait for services that can pull data from an upstream system
#[async_trait]
pub trait SyncService: Send + Sync {
    async fn sync(&self, context: &RequestContext) -> Result<Value, ServiceError>;
}

/// Combined CRUD trait for full resource management
pub trait CrudService<T, F>:
    ListService<T, F>
    + GetService<T>
    + CreateService<T>
    + UpdateService<T>
    + DeleteService
    + SyncService
{
}

impl<S, T, F> CrudService<T, F> for S where
    S: ListService<T, F>
        + GetService<T>
        + CreateService<T>
        + UpdateService<T>
        + DeleteService
        + SyncService
{
}
