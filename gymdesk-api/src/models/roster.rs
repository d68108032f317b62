//! Class roster canonical record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::guards::{as_finite_f64, as_trimmed_str};
use crate::normalize::resolve::{parse_datetime, pick_str};

use super::{resolve_person_name, resolve_ref_id, UNKNOWN_MEMBER};

const CHECK_IN_ALIASES: &[&str] = &["checkedInAt", "checkInTime", "checkedInTime"];

/// Attendance status of a roster row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Attended,
    NoShow,
    Cancelled,
    Booked,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Attended => "ATTENDED",
            AttendanceStatus::NoShow => "NO_SHOW",
            AttendanceStatus::Cancelled => "CANCELLED",
            AttendanceStatus::Booked => "BOOKED",
        }
    }

    /// Map the raw status strings the backend has emitted over time
    fn from_raw(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "ATTENDED" | "COMPLETED" | "CHECKED_IN" => AttendanceStatus::Attended,
            "NOSHOW" | "NO_SHOW" => AttendanceStatus::NoShow,
            "CANCELED" | "CANCELLED" => AttendanceStatus::Cancelled,
            _ => AttendanceStatus::Booked,
        }
    }
}

/// A member's row on a class roster.
///
/// A present check-in timestamp is definitive evidence of attendance: when
/// any check-in alias carries a non-empty value, `status` is forced to
/// [`AttendanceStatus::Attended`] regardless of the raw status field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMember {
    /// Empty string when no member reference survived normalization
    pub member_id: String,
    pub member_name: String,
    /// Required for no-show/cancel transitions; absent on some legacy rows
    pub booking_id: Option<String>,
    pub status: AttendanceStatus,
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl RosterMember {
    /// Assemble a roster row from any raw payload shape.
    pub fn from_value(raw: &Value) -> Self {
        // Presence of any non-empty check-in value forces ATTENDED, even
        // when the timestamp itself does not parse
        let check_in_raw = CHECK_IN_ALIASES
            .iter()
            .find_map(|key| raw.get(*key))
            .filter(|v| as_trimmed_str(v).is_some() || as_finite_f64(v).is_some());

        let status = if check_in_raw.is_some() {
            AttendanceStatus::Attended
        } else {
            pick_str(raw, &["status", "attendanceStatus", "bookingStatus"])
                .map(|s| AttendanceStatus::from_raw(&s))
                .unwrap_or(AttendanceStatus::Booked)
        };

        Self {
            member_id: resolve_ref_id(raw, &["memberId", "userId"], "member")
                .unwrap_or_default(),
            member_name: resolve_person_name(raw, &["memberName", "fullName"])
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
            booking_id: pick_str(raw, &["bookingId", "booking_id", "reservationId"]),
            status,
            checked_in_at: check_in_raw.and_then(parse_datetime),
        }
    }
}
