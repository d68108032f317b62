//! Membership plan canonical record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_count, pick_enum, pick_money, pick_str, CaseFold};

/// Allowed plan statuses; anything else normalizes to `ACTIVE`
pub const PLAN_STATUSES: &[&str] = &["ACTIVE", "INACTIVE", "ARCHIVED"];

/// Duration assumed when no alias carries a usable value
const DEFAULT_DURATION_DAYS: i64 = 30;

/// A membership plan offered by the gym
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    /// At least 1; defaults to 30 when absent
    pub duration_days: i64,
    /// Absent or non-numeric prices normalize to 0
    pub price: f64,
    /// One of [`PLAN_STATUSES`]
    pub status: String,
    pub description: Option<String>,
}

impl MembershipPlan {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            id: pick_str(raw, &["id", "_id", "planId"]).unwrap_or_default(),
            name: pick_str(raw, &["planName", "name", "title"])
                .unwrap_or_else(|| "Untitled plan".to_string()),
            duration_days: pick_count(raw, &["durationDays", "duration", "validityDays"])
                .unwrap_or(DEFAULT_DURATION_DAYS)
                .max(1),
            price: pick_money(raw, &["price", "amount", "cost"]).max(0.0),
            status: pick_enum(
                raw,
                &["status", "planStatus"],
                PLAN_STATUSES,
                CaseFold::Upper,
                "ACTIVE",
            ),
            description: pick_str(raw, &["description", "details"]),
        }
    }
}
