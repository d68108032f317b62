//! Equipment / inventory service
//!
//! Product updates moved from `PUT /products/{id}` to
//! `PATCH /equipment/{id}`; older deployments answer the new route with
//! 404/405, so updates fall back to the legacy verb and path.

use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::fallback::{request_with_fallback, FallbackPolicy};
use crate::models::EquipmentRecord;
use crate::normalize::unwrap_payload;

/// Equipment and inventory operations
pub struct EquipmentService {
    client: Arc<ApiClient>,
}

impl EquipmentService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All inventory matching the optional category filter, across every
    /// page.
    pub async fn list_equipment(
        &self,
        category: Option<String>,
    ) -> Result<Vec<EquipmentRecord>, ApiError> {
        let params = vec![("category".to_string(), category)];
        let rows = self.client.get_all_pages("/equipment", &params).await?;
        Ok(rows.iter().map(EquipmentRecord::from_value).collect())
    }

    /// Items at or below their reorder threshold.
    pub async fn low_stock(&self) -> Result<Vec<EquipmentRecord>, ApiError> {
        let all = self.list_equipment(None).await?;
        Ok(all.into_iter().filter(|item| item.is_low_stock).collect())
    }

    pub async fn create_item(&self, body: &Value) -> Result<EquipmentRecord, ApiError> {
        let payload = self.client.post("/equipment", body).await?;
        Ok(EquipmentRecord::from_value(unwrap_payload(&payload)))
    }

    /// Update an item, trying the current PATCH route first and the legacy
    /// PUT route second.
    pub async fn update_item(
        &self,
        item_id: &str,
        patch: &Value,
    ) -> Result<EquipmentRecord, ApiError> {
        let current = format!("/equipment/{item_id}");
        let legacy = format!("/products/{item_id}");

        let payload = request_with_fallback(
            FallbackPolicy::EndpointShape,
            vec![
                self.client.patch(&current, patch).boxed(),
                self.client.put(&legacy, patch).boxed(),
            ],
        )
        .await?;

        Ok(EquipmentRecord::from_value(unwrap_payload(&payload)))
    }

    /// Remove an item from inventory.
    pub async fn remove_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/equipment/{item_id}")).await?;
        Ok(())
    }
}
