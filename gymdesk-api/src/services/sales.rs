//! Point-of-sale service

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ApiClient, QueryParams};
use crate::error::ApiError;
use crate::models::SaleRecord;
use crate::normalize::unwrap_payload;

/// Sales listing and recording
pub struct SalesService {
    client: Arc<ApiClient>,
}

impl SalesService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Sales in the optional date range, optionally for one member, across
    /// every page in server order.
    pub async fn list_sales(
        &self,
        start_date: Option<String>,
        end_date: Option<String>,
        member_id: Option<String>,
    ) -> Result<Vec<SaleRecord>, ApiError> {
        let params: QueryParams = vec![
            ("startDate".to_string(), start_date),
            ("endDate".to_string(), end_date),
            ("memberId".to_string(), member_id),
        ];

        let rows = self.client.get_all_pages("/sales", &params).await?;
        Ok(rows.iter().map(SaleRecord::from_value).collect())
    }

    pub async fn get_sale(&self, sale_id: &str) -> Result<SaleRecord, ApiError> {
        let payload = self.client.get(&format!("/sales/{sale_id}"), &[]).await?;
        Ok(SaleRecord::from_value(unwrap_payload(&payload)))
    }

    pub async fn record_sale(&self, body: &Value) -> Result<SaleRecord, ApiError> {
        let payload = self.client.post("/sales", body).await?;
        let sale = SaleRecord::from_value(unwrap_payload(&payload));
        tracing::info!(sale_id = %sale.id, amount = sale.total_amount, "Sale recorded");
        Ok(sale)
    }

    /// Refund a sale; modeled as a POST sub-resource.
    pub async fn refund_sale(&self, sale_id: &str) -> Result<(), ApiError> {
        self.client
            .post_action(&format!("/sales/{sale_id}/refund"))
            .await?;
        Ok(())
    }
}
