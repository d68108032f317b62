//! Gym member canonical record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_datetime, pick_enum, pick_str, CaseFold};

use super::{resolve_person_name, UNKNOWN_MEMBER};

/// Allowed membership statuses; anything else normalizes to `INACTIVE`
pub const MEMBERSHIP_STATUSES: &[&str] = &["ACTIVE", "INACTIVE", "FROZEN", "EXPIRED"];

/// A gym member as shown in admin screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    pub full_name: String,
    /// Lowercased when present
    pub email: Option<String>,
    pub phone: Option<String>,
    /// One of [`MEMBERSHIP_STATUSES`]
    pub membership_status: String,
    pub membership_plan_id: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl MemberRecord {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            id: pick_str(raw, &["id", "_id", "memberId"]).unwrap_or_default(),
            full_name: resolve_person_name(raw, &["fullName", "name", "memberName"])
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
            email: pick_str(raw, &["email", "emailAddress"]).map(|e| e.to_lowercase()),
            phone: pick_str(raw, &["phone", "phoneNumber", "mobile"]),
            membership_status: pick_enum(
                raw,
                &["membershipStatus", "status"],
                MEMBERSHIP_STATUSES,
                CaseFold::Upper,
                "INACTIVE",
            ),
            membership_plan_id: pick_str(raw, &["membershipPlanId", "planId"]),
            joined_at: pick_datetime(raw, &["joinedAt", "joinDate", "createdAt"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_from_first_last() {
        let member = MemberRecord::from_value(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace"
        }));
        assert_eq!(member.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_email_lowercased() {
        let member = MemberRecord::from_value(&json!({"email": "Ada@Example.COM"}));
        assert_eq!(member.email, Some("ada@example.com".to_string()));
    }

    #[test]
    fn test_status_default() {
        let member = MemberRecord::from_value(&json!({"status": "comped"}));
        assert_eq!(member.membership_status, "INACTIVE");

        let member = MemberRecord::from_value(&json!({"membershipStatus": "frozen"}));
        assert_eq!(member.membership_status, "FROZEN");
    }

    #[test]
    fn test_totality_on_garbage() {
        let member = MemberRecord::from_value(&json!(null));
        assert_eq!(member.full_name, "Unknown member");
        assert_eq!(member.membership_status, "INACTIVE");
        assert_eq!(member.email, None);
    }
}
