//! Point-of-sale canonical record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_datetime, pick_enum, pick_money, pick_str, CaseFold};

use super::resolve_ref_id;

/// Allowed payment statuses; anything else normalizes to `UNKNOWN`
pub const PAYMENT_STATUSES: &[&str] = &["PAID", "PENDING", "REFUNDED", "FAILED"];

/// A completed or in-flight sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: String,
    pub member_id: Option<String>,
    pub seller_id: Option<String>,
    /// Absent or non-numeric amounts normalize to 0
    pub total_amount: f64,
    /// One of [`PAYMENT_STATUSES`], or `UNKNOWN`
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub sold_at: Option<DateTime<Utc>>,
}

impl SaleRecord {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            id: pick_str(raw, &["id", "_id", "saleId", "invoiceId"]).unwrap_or_default(),
            member_id: resolve_ref_id(raw, &["memberId", "customerId"], "member"),
            seller_id: resolve_ref_id(raw, &["sellerId", "staffId"], "seller"),
            total_amount: pick_money(raw, &["totalAmount", "total", "amount"]),
            payment_status: pick_enum(
                raw,
                &["paymentStatus", "status"],
                PAYMENT_STATUSES,
                CaseFold::Upper,
                "UNKNOWN",
            ),
            payment_method: pick_str(raw, &["paymentMethod", "method"]),
            sold_at: pick_datetime(raw, &["soldAt", "saleDate", "createdAt"]),
        }
    }
}
