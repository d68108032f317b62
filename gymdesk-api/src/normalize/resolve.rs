//! Field resolvers
//!
//! First-match-wins resolution across known legacy field aliases, plus enum,
//! numeric, and date normalization. Alias precedence order matters: the
//! first candidate that passes its guard wins, later candidates are ignored
//! even when present.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use super::guards::{as_bool_strict, as_finite_f64, as_trimmed_str};

/// Epoch values at or above this are taken as milliseconds, below as seconds
const EPOCH_MILLIS_CUTOFF: f64 = 100_000_000_000.0;

/// First non-empty string among `aliases`
pub fn pick_str(record: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).and_then(as_trimmed_str))
}

/// First finite number among `aliases`
pub fn pick_f64(record: &Value, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).and_then(as_finite_f64))
}

/// First strict boolean among `aliases`
pub fn pick_bool(record: &Value, aliases: &[&str]) -> Option<bool> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).and_then(as_bool_strict))
}

/// First finite number among `aliases`, truncated to an integer count
pub fn pick_count(record: &Value, aliases: &[&str]) -> Option<i64> {
    pick_f64(record, aliases).map(|n| n.trunc() as i64)
}

/// Currency amount: first finite number among `aliases`, absent/NaN → 0
pub fn pick_money(record: &Value, aliases: &[&str]) -> f64 {
    pick_f64(record, aliases).unwrap_or(0.0)
}

/// Case used when matching enum candidates against the allowed set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    Upper,
    Lower,
}

/// Enum normalization: fold the first string candidate, compare against the
/// allowed set, fall back to `default` on a miss or absence.
pub fn pick_enum(
    record: &Value,
    aliases: &[&str],
    allowed: &[&str],
    fold: CaseFold,
    default: &str,
) -> String {
    let Some(candidate) = pick_str(record, aliases) else {
        return default.to_string();
    };

    let folded = match fold {
        CaseFold::Upper => candidate.to_uppercase(),
        CaseFold::Lower => candidate.to_lowercase(),
    };

    if allowed.contains(&folded.as_str()) {
        folded
    } else {
        default.to_string()
    }
}

/// Parse a single raw value as a UTC timestamp.
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DD[THH:MM:SS]` strings, and
/// epoch seconds/milliseconds. Invalid dates are absent, never an error.
pub fn parse_datetime(v: &Value) -> Option<DateTime<Utc>> {
    if let Some(s) = as_trimmed_str(v) {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
        return None;
    }

    let n = as_finite_f64(v)?;
    if n <= 0.0 {
        return None;
    }
    if n >= EPOCH_MILLIS_CUTOFF {
        Utc.timestamp_millis_opt(n.trunc() as i64).single()
    } else {
        Utc.timestamp_opt(n.trunc() as i64, 0).single()
    }
}

/// First parseable timestamp among `aliases`
pub fn pick_datetime(record: &Value, aliases: &[&str]) -> Option<DateTime<Utc>> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).and_then(|v| parse_datetime(v)))
}

/// Clamp a count into `[min, max]`
pub fn clamp_count(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// Deterministic slug for identity fallback: lowercase alphanumeric runs
/// joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}
