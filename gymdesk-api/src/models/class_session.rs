//! Class session canonical record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{
    clamp_count, pick_count, pick_datetime, pick_enum, pick_str, slugify, CaseFold,
};

use super::resolve_ref_id;

/// Allowed class categories; anything else normalizes to `OTHER`
pub const CLASS_CATEGORIES: &[&str] = &[
    "YOGA", "PILATES", "HIIT", "STRENGTH", "CARDIO", "SPIN", "BOXING", "DANCE", "OTHER",
];

const DEFAULT_CLASS_NAME: &str = "Untitled class";

/// A scheduled class occurrence with capacity bookkeeping.
///
/// `booked_count` and `available_slots` are clamped to `[0, max_capacity]`
/// independently, so they stay in range even when the raw payload was
/// internally inconsistent. `occupancy_ratio` is derived once at assembly
/// and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub class_name: String,
    /// One of [`CLASS_CATEGORIES`]
    pub category: String,
    pub trainer_id: Option<String>,
    pub trainer_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_capacity: i64,
    pub booked_count: i64,
    pub available_slots: i64,
    /// `booked_count / max_capacity`, 0 when capacity is 0
    pub occupancy_ratio: f64,
}

impl ClassSession {
    /// Assemble a session from any raw payload shape. Total: garbage input
    /// yields a defaulted record.
    pub fn from_value(raw: &Value) -> Self {
        let class_name = pick_str(raw, &["className", "name", "title"])
            .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string());

        let category = pick_enum(
            raw,
            &["classType", "category", "classCategory"],
            CLASS_CATEGORIES,
            CaseFold::Upper,
            "OTHER",
        );

        let start_time = pick_datetime(raw, &["startTime", "startsAt", "startDate"]);
        let end_time = pick_datetime(raw, &["endTime", "endsAt", "endDate"]);

        let max_capacity = pick_count(raw, &["maxCapacity", "capacity", "maxSlots"])
            .unwrap_or(0)
            .max(0);

        let raw_available = pick_count(raw, &["availableSlots", "openSlots"]);
        let raw_booked = pick_count(raw, &["bookedCount", "bookedSlots", "enrolled"])
            // Derived-from-siblings inference: absent booked count recovered
            // from the advertised free slots
            .or_else(|| raw_available.map(|available| max_capacity - available));

        let booked_count = clamp_count(raw_booked.unwrap_or(0), 0, max_capacity);
        let available_slots = clamp_count(
            raw_available.unwrap_or(max_capacity - booked_count),
            0,
            max_capacity,
        );

        let occupancy_ratio = if max_capacity > 0 {
            booked_count as f64 / max_capacity as f64
        } else {
            0.0
        };

        let id = pick_str(raw, &["id", "_id", "classScheduleId", "scheduleId"])
            .unwrap_or_else(|| synthesize_id(&class_name, start_time));

        Self {
            id,
            class_name,
            category,
            trainer_id: resolve_ref_id(raw, &["trainerId", "instructorId"], "trainer"),
            trainer_name: pick_str(raw, &["trainerName", "instructorName"]).or_else(|| {
                raw.get("trainer")
                    .and_then(|t| pick_str(t, &["name", "fullName"]))
            }),
            start_time,
            end_time,
            max_capacity,
            booked_count,
            available_slots,
            occupancy_ratio,
        }
    }
}

/// Deterministic identity fallback for legacy rows without an id: slugified
/// name plus the ISO start time, so repeated normalization of the same
/// logical session yields the same id.
fn synthesize_id(class_name: &str, start_time: Option<DateTime<Utc>>) -> String {
    let slug = slugify(class_name);
    match start_time {
        Some(start) => format!("{}-{}", slug, start.to_rfc3339()),
        None => slug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alias_precedence_class_name() {
        let session = ClassSession::from_value(&json!({"className": "A", "name": "B"}));
        assert_eq!(session.class_name, "A");
    }

    #[test]
    fn test_category_precedence_and_default() {
        let session =
            ClassSession::from_value(&json!({"classType": "yoga", "category": "HIIT"}));
        assert_eq!(session.category, "YOGA");

        let session = ClassSession::from_value(&json!({"category": "underwater basket"}));
        assert_eq!(session.category, "OTHER");
    }

    #[test]
    fn test_booked_count_inferred_from_available_slots() {
        let session =
            ClassSession::from_value(&json!({"maxCapacity": 20, "availableSlots": 14}));
        assert_eq!(session.booked_count, 6);
        assert_eq!(session.available_slots, 14);
    }

    #[test]
    fn test_clamping_against_inconsistent_input() {
        let session = ClassSession::from_value(&json!({
            "maxCapacity": 10,
            "bookedCount": 45,
            "availableSlots": -3
        }));
        assert_eq!(session.booked_count, 10);
        assert_eq!(session.available_slots, 0);
    }

    #[test]
    fn test_occupancy_ratio() {
        let session =
            ClassSession::from_value(&json!({"maxCapacity": 20, "bookedCount": 5}));
        assert!((session.occupancy_ratio - 0.25).abs() < f64::EPSILON);

        let session = ClassSession::from_value(&json!({"maxCapacity": 0, "bookedCount": 5}));
        assert_eq!(session.occupancy_ratio, 0.0);
    }

    #[test]
    fn test_identity_fallback_is_deterministic() {
        let raw = json!({
            "name": "Morning Yoga",
            "startTime": "2025-03-01T10:00:00Z"
        });
        let first = ClassSession::from_value(&raw);
        let second = ClassSession::from_value(&raw);
        assert_eq!(first.id, "morning-yoga-2025-03-01T10:00:00+00:00");
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_totality_on_garbage() {
        for raw in [json!(null), json!(42), json!([1, 2]), json!("x")] {
            let session = ClassSession::from_value(&raw);
            assert_eq!(session.class_name, "Untitled class");
            assert_eq!(session.category, "OTHER");
            assert_eq!(session.max_capacity, 0);
            assert_eq!(session.booked_count, 0);
            assert_eq!(session.occupancy_ratio, 0.0);
            assert!(!session.id.is_empty());
        }
    }

    #[test]
    fn test_trainer_resolution_from_nested_object() {
        let session = ClassSession::from_value(&json!({
            "trainer": {"id": "t-9", "name": "Sam Cole"}
        }));
        assert_eq!(session.trainer_id, Some("t-9".to_string()));
        assert_eq!(session.trainer_name, Some("Sam Cole".to_string()));
    }
}
