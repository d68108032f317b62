//! Trainer service

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::TrainerRecord;
use crate::normalize::unwrap_payload;

/// Trainer roster management
pub struct TrainerService {
    client: Arc<ApiClient>,
}

impl TrainerService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All trainers across every page, sorted by name.
    pub async fn list_trainers(&self) -> Result<Vec<TrainerRecord>, ApiError> {
        let rows = self.client.get_all_pages("/trainers", &[]).await?;
        let mut trainers: Vec<TrainerRecord> =
            rows.iter().map(TrainerRecord::from_value).collect();
        trainers.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(trainers)
    }

    pub async fn create_trainer(&self, body: &Value) -> Result<TrainerRecord, ApiError> {
        let payload = self.client.post("/trainers", body).await?;
        Ok(TrainerRecord::from_value(unwrap_payload(&payload)))
    }

    pub async fn update_trainer(
        &self,
        trainer_id: &str,
        patch: &Value,
    ) -> Result<TrainerRecord, ApiError> {
        let payload = self
            .client
            .patch(&format!("/trainers/{trainer_id}"), patch)
            .await?;
        Ok(TrainerRecord::from_value(unwrap_payload(&payload)))
    }

    /// Deactivate a trainer.
    pub async fn deactivate_trainer(&self, trainer_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/trainers/{trainer_id}")).await?;
        Ok(())
    }
}
