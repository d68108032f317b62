//! Reports and dashboard service
//!
//! The summary endpoint has lived at three routes; all are tried under the
//! report fallback policy (400/404/405/501 advance). Dashboard assembly
//! settles all sections: a failed sub-request degrades its own section to
//! empty defaults rather than failing the whole screen.

use std::sync::Arc;

use futures::FutureExt;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::fallback::{request_with_fallback, FallbackPolicy};
use crate::models::{ClassSession, ReportsSummary, SaleRecord};
use crate::normalize::{to_array_payload, unwrap_payload};

/// Everything the dashboard screen renders in one assembly
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub summary: ReportsSummary,
    pub recent_sales: Vec<SaleRecord>,
    pub upcoming_classes: Vec<ClassSession>,
}

/// Reports and dashboard assembly
pub struct ReportsService {
    client: Arc<ApiClient>,
}

impl ReportsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Aggregated summary counters, whichever route shape this deployment
    /// supports.
    pub async fn summary(&self) -> Result<ReportsSummary, ApiError> {
        let payload = request_with_fallback(
            FallbackPolicy::Report,
            vec![
                self.client.get("/reports/summary", &[]).boxed(),
                self.client.get("/dashboard/summary", &[]).boxed(),
                self.client.get("/stats/overview", &[]).boxed(),
            ],
        )
        .await?;

        Ok(ReportsSummary::from_value(unwrap_payload(&payload)))
    }

    /// Assemble the dashboard: summary, recent sales, and upcoming classes
    /// fetched concurrently. Settle-all: whatever succeeded is normalized,
    /// whatever failed is substituted with its empty default.
    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let sales_params = [("limit".to_string(), Some("10".to_string()))];
        let upcoming_params = [("upcoming".to_string(), Some("true".to_string()))];

        let summary = self.summary();
        let recent_sales = self.client.get("/sales", &sales_params);
        let upcoming = self.client.get("/class-schedules", &upcoming_params);

        let (summary, sales_payload, classes_payload) =
            futures::join!(summary, recent_sales, upcoming);

        let summary = summary.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Dashboard summary unavailable, showing defaults");
            ReportsSummary::default()
        });

        let recent_sales = match sales_payload {
            Ok(payload) => to_array_payload(&payload)
                .iter()
                .map(SaleRecord::from_value)
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "Recent sales unavailable, showing empty list");
                Vec::new()
            }
        };

        let upcoming_classes = match classes_payload {
            Ok(payload) => to_array_payload(&payload)
                .iter()
                .map(ClassSession::from_value)
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "Upcoming classes unavailable, showing empty list");
                Vec::new()
            }
        };

        Ok(DashboardData {
            summary,
            recent_sales,
            upcoming_classes,
        })
    }
}
