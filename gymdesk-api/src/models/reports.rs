//! Reports summary canonical record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_count, pick_money};

/// Aggregated counters for the reports/dashboard screens.
///
/// Every field defaults to 0; a missing or malformed section of the report
/// payload degrades that counter, never the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportsSummary {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub active_members: i64,
    pub new_members_this_month: i64,
    pub attendance_today: i64,
    pub scheduled_classes: i64,
}

impl ReportsSummary {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            total_revenue: pick_money(raw, &["totalRevenue", "revenue", "grossRevenue"]),
            monthly_revenue: pick_money(raw, &["monthlyRevenue", "revenueThisMonth"]),
            active_members: pick_count(raw, &["activeMembers", "memberCount", "totalMembers"])
                .unwrap_or(0)
                .max(0),
            new_members_this_month: pick_count(raw, &["newMembersThisMonth", "newMembers"])
                .unwrap_or(0)
                .max(0),
            attendance_today: pick_count(raw, &["attendanceToday", "todayAttendance"])
                .unwrap_or(0)
                .max(0),
            scheduled_classes: pick_count(raw, &["scheduledClasses", "classCount", "totalClasses"])
                .unwrap_or(0)
                .max(0),
        }
    }
}
