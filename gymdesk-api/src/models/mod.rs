//! Canonical view-model records
//!
//! Every record type has a total `from_value` constructor: any raw JSON
//! input — `null`, scalars, arrays, deeply nested garbage — produces a
//! fully-populated record with documented defaults. Records are created
//! fresh on every call, reference other entities only by string id, and are
//! never mutated in place.

pub mod class_session;
pub mod equipment;
pub mod member;
pub mod membership;
pub mod reports;
pub mod roster;
pub mod sale;
pub mod settings;
pub mod trainer;

pub use class_session::ClassSession;
pub use equipment::EquipmentRecord;
pub use member::MemberRecord;
pub use membership::MembershipPlan;
pub use reports::ReportsSummary;
pub use roster::{AttendanceStatus, RosterMember};
pub use sale::SaleRecord;
pub use settings::GymSettings;
pub use trainer::TrainerRecord;

use serde_json::Value;

use crate::normalize::resolve::pick_str;

/// Terminal default for any person whose name cannot be resolved
pub(crate) const UNKNOWN_MEMBER: &str = "Unknown member";

/// Resolve a person's display name from the shapes the backend emits.
///
/// Precedence: explicit display-name aliases on the row, then
/// `firstName`/`lastName` assembled from the row itself, a nested `member`
/// object, or a doubly-nested `member.user` object, in that order.
pub(crate) fn resolve_person_name(record: &Value, aliases: &[&str]) -> Option<String> {
    if let Some(name) = pick_str(record, aliases) {
        return Some(name);
    }

    let nested = record.get("member");
    let doubly_nested = nested.and_then(|m| m.get("user"));

    [Some(record), nested, doubly_nested]
        .into_iter()
        .flatten()
        .find_map(first_last_name)
}

/// `"firstName lastName".trim()` when either half is present
fn first_last_name(record: &Value) -> Option<String> {
    let first = pick_str(record, &["firstName", "first_name"]);
    let last = pick_str(record, &["lastName", "last_name"]);

    match (first, last) {
        (None, None) => None,
        (first, last) => Some(
            format!(
                "{} {}",
                first.unwrap_or_default(),
                last.unwrap_or_default()
            )
            .trim()
            .to_string(),
        ),
    }
}

/// Resolve a cross-entity string id reference from the row itself or a
/// nested object (`member`, `trainer`, ...).
pub(crate) fn resolve_ref_id(record: &Value, aliases: &[&str], nested_key: &str) -> Option<String> {
    pick_str(record, aliases).or_else(|| {
        record
            .get(nested_key)
            .and_then(|nested| pick_str(nested, &["id", "_id"]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_from_top_level_alias() {
        let row = json!({"memberName": "Ada Lovelace", "firstName": "Grace"});
        assert_eq!(
            resolve_person_name(&row, &["memberName", "fullName"]),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_name_from_top_level_first_last() {
        let row = json!({"firstName": "Ada", "lastName": "Lovelace"});
        assert_eq!(
            resolve_person_name(&row, &["memberName", "fullName"]),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_name_from_nested_member() {
        let row = json!({"member": {"firstName": "Ada", "lastName": "Lovelace"}});
        assert_eq!(
            resolve_person_name(&row, &["memberName"]),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_name_from_doubly_nested_member_user() {
        let row = json!({"member": {"user": {"firstName": "Ada"}}});
        assert_eq!(
            resolve_person_name(&row, &["memberName"]),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn test_name_absent() {
        assert_eq!(resolve_person_name(&json!({}), &["memberName"]), None);
        assert_eq!(resolve_person_name(&json!(null), &["memberName"]), None);
    }

    #[test]
    fn test_ref_id_top_level_then_nested() {
        let row = json!({"memberId": "m-1", "member": {"id": "m-2"}});
        assert_eq!(
            resolve_ref_id(&row, &["memberId"], "member"),
            Some("m-1".to_string())
        );

        let row = json!({"member": {"_id": "m-2"}});
        assert_eq!(
            resolve_ref_id(&row, &["memberId"], "member"),
            Some("m-2".to_string())
        );
    }
}
