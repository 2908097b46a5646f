//! Generic REST service for any [`Resource`] binding.

use crate::api::client::ApiClient;
use crate::api::envelope::{Page, decode_page, decode_record};
use crate::api::models::RecordId;
use crate::core::context::RequestContext;
use crate::core::query_state::{QueryState, validate_items_per_page, validate_page};
use crate::core::resource::Resource;
use crate::core::services::traits::{
    CreateService, DeleteService, GetService, ListService, SyncService, UpdateService,
};
use crate::core::services::types::ServiceError;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct ResourceService<R: Resource> {
    client: Arc<ApiClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn validate_id(id: &RecordId) -> Result<(), ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::Validation {
                field: "id".to_string(),
                message: format!("A {} ID must be given and non-zero", R::NAME),
            });
        }
        if !id.is_path_segment() {
            return Err(ServiceError::Validation {
                field: "id".to_string(),
                message: format!("'{}' is not a valid {} ID", id, R::NAME),
            });
        }
        Ok(())
    }

    fn not_found(id: &RecordId, error: ApiError) -> ServiceError {
        match error {
            ApiError::Http { status: 404, .. } => ServiceError::NotFound {
                resource_type: R::NAME.to_string(),
                id: id.to_string(),
            },
            _ => ServiceError::Api(error),
        }
    }
}

#[async_trait]
impl<R: Resource> ListService<R::Record, R::Filters> for ResourceService<R> {
    async fn list(
        &self,
        context: &RequestContext,
        query: &QueryState<R::Filters>,
    ) -> Result<Page<R::Record>, ServiceError> {
        validate_page(query.page)?;
        validate_items_per_page(query.items_per_page)?;

        let params = query.to_params();
        log::debug!("Listing {} with {}", R::PLURAL, params.encode());

        let body = self.client.get(R::PATH, context, params.pairs()).await?;
        Ok(decode_page(body, R::PATH))
    }
}

#[async_trait]
impl<R: Resource> GetService<R::Record> for ResourceService<R> {
    async fn get(
        &self,
        context: &RequestContext,
        id: &RecordId,
    ) -> Result<R::Record, ServiceError> {
        Self::validate_id(id)?;

        let path = R::item_path(id);
        let body = self
            .client
            .get(&path, context, &[])
            .await
            .map_err(|e| Self::not_found(id, e))?;
        Ok(decode_record(body, &path)?)
    }
}

#[async_trait]
impl<R: Resource> CreateService<R::Record> for ResourceService<R> {
    async fn create(
        &self,
        context: &RequestContext,
        payload: &Value,
    ) -> Result<R::Record, ServiceError> {
        let body = self.client.post(R::PATH, context, Some(payload)).await?;
        Ok(decode_record(body, R::PATH)?)
    }
}

#[async_trait]
impl<R: Resource> UpdateService<R::Record> for ResourceService<R> {
    async fn update(
        &self,
        context: &RequestContext,
        id: &RecordId,
        payload: &Value,
    ) -> Result<R::Record, ServiceError> {
        Self::validate_id(id)?;

        let path = R::item_path(id);
        let body = self
            .client
            .patch(&path, context, payload)
            .await
            .map_err(|e| Self::not_found(id, e))?;
        Ok(decode_record(body, &path)?)
    }
}

#[async_trait]
impl<R: Resource> DeleteService for ResourceService<R> {
    async fn delete(&self, context: &RequestContext, id: &RecordId) -> Result<(), ServiceError> {
        Self::validate_id(id)?;

        self.client
            .delete(&R::item_path(id), context)
            .await
            .map_err(|e| Self::not_found(id, e))?;
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> SyncService for ResourceService<R> {
    async fn sync(&self, context: &RequestContext) -> Result<Value, ServiceError> {
        if !R::SUPPORTS_SYNC {
            return Err(ServiceError::Unsupported {
                resource_type: R::PLURAL.to_string(),
                operation: "sync".to_string(),
            });
        }

        let body = self.client.post(&R::sync_path(), context, None).await?;
        Ok(body.get("data").cloned().unwrap_or(body))
    }
}
