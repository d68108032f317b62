//! Membership plan service

use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::MembershipPlan;
use crate::normalize::unwrap_payload;

/// Membership plan CRUD and freeze/unfreeze transitions
pub struct MembershipService {
    client: Arc<ApiClient>,
}

impl MembershipService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All plans across every page, in server order.
    pub async fn list_plans(&self) -> Result<Vec<MembershipPlan>, ApiError> {
        let rows = self.client.get_all_pages("/membership-plans", &[]).await?;
        Ok(rows.iter().map(MembershipPlan::from_value).collect())
    }

    pub async fn get_plan(&self, plan_id: &str) -> Result<MembershipPlan, ApiError> {
        let payload = self
            .client
            .get(&format!("/membership-plans/{plan_id}"), &[])
            .await?;
        Ok(MembershipPlan::from_value(unwrap_payload(&payload)))
    }

    pub async fn create_plan(&self, body: &Value) -> Result<MembershipPlan, ApiError> {
        let payload = self.client.post("/membership-plans", body).await?;
        Ok(MembershipPlan::from_value(unwrap_payload(&payload)))
    }

    pub async fn update_plan(
        &self,
        plan_id: &str,
        patch: &Value,
    ) -> Result<MembershipPlan, ApiError> {
        let payload = self
            .client
            .patch(&format!("/membership-plans/{plan_id}"), patch)
            .await?;
        Ok(MembershipPlan::from_value(unwrap_payload(&payload)))
    }

    /// Freeze a member's subscription; modeled as a POST sub-resource.
    pub async fn freeze(&self, membership_id: &str) -> Result<(), ApiError> {
        self.client
            .post_action(&format!("/memberships/{membership_id}/freeze"))
            .await?;
        tracing::info!(membership_id, "Membership frozen");
        Ok(())
    }

    pub async fn unfreeze(&self, membership_id: &str) -> Result<(), ApiError> {
        self.client
            .post_action(&format!("/memberships/{membership_id}/unfreeze"))
            .await?;
        tracing::info!(membership_id, "Membership unfrozen");
        Ok(())
    }
}
