//! Member service
//!
//! Search issues the by-name and by-email queries concurrently and merges
//! the results: name hits first, then email hits not already seen. Both
//! requests must succeed; a search where half the results silently vanished
//! would be worse than an error.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::MemberRecord;
use crate::normalize::{to_array_payload, unwrap_payload};

/// Member CRUD and search
pub struct MemberService {
    client: Arc<ApiClient>,
}

impl MemberService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All members matching the optional status filter, across every page.
    pub async fn list_members(
        &self,
        status: Option<String>,
    ) -> Result<Vec<MemberRecord>, ApiError> {
        let params = vec![("status".to_string(), status)];
        let rows = self.client.get_all_pages("/members", &params).await?;
        Ok(rows.iter().map(MemberRecord::from_value).collect())
    }

    pub async fn get_member(&self, member_id: &str) -> Result<MemberRecord, ApiError> {
        let payload = self.client.get(&format!("/members/{member_id}"), &[]).await?;
        Ok(MemberRecord::from_value(unwrap_payload(&payload)))
    }

    pub async fn create_member(&self, body: &Value) -> Result<MemberRecord, ApiError> {
        let payload = self.client.post("/members", body).await?;
        Ok(MemberRecord::from_value(unwrap_payload(&payload)))
    }

    pub async fn update_member(
        &self,
        member_id: &str,
        patch: &Value,
    ) -> Result<MemberRecord, ApiError> {
        let payload = self
            .client
            .patch(&format!("/members/{member_id}"), patch)
            .await?;
        Ok(MemberRecord::from_value(unwrap_payload(&payload)))
    }

    /// Deactivate a member.
    pub async fn deactivate_member(&self, member_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/members/{member_id}")).await?;
        Ok(())
    }

    /// Search by name and email concurrently, merged and deduped by id.
    pub async fn search(&self, query: &str) -> Result<Vec<MemberRecord>, ApiError> {
        let name_params = [("search".to_string(), Some(query.to_string()))];
        let email_params = [("email".to_string(), Some(query.to_string()))];

        let by_name = self.client.get("/members", &name_params);
        let by_email = self.client.get("/members", &email_params);

        let (name_payload, email_payload) = futures::try_join!(by_name, by_email)?;

        let mut merged = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for payload in [name_payload, email_payload] {
            for row in to_array_payload(&payload) {
                let member = MemberRecord::from_value(&row);
                // Rows that lost their id during normalization cannot be
                // deduped; keep them all rather than collapse them
                if member.id.is_empty() || seen.insert(member.id.clone()) {
                    merged.push(member);
                }
            }
        }

        tracing::debug!(query, hits = merged.len(), "Member search complete");

        Ok(merged)
    }
}
