//! Gym settings service
//!
//! The settings endpoint is the one place the backend double-wraps its
//! envelope (`{data: {data: {...}}}`); the bounded unwrapper absorbs both
//! shapes.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::GymSettings;
use crate::normalize::unwrap_payload;

/// Facility settings read/update
pub struct SettingsService {
    client: Arc<ApiClient>,
}

impl SettingsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_settings(&self) -> Result<GymSettings, ApiError> {
        let payload = self.client.get("/settings", &[]).await?;
        Ok(GymSettings::from_value(unwrap_payload(&payload)))
    }

    pub async fn update_settings(&self, patch: &Value) -> Result<GymSettings, ApiError> {
        let payload = self.client.patch("/settings", patch).await?;
        Ok(GymSettings::from_value(unwrap_payload(&payload)))
    }
}
