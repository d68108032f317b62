//! Envelope unwrapping and pagination flattening
//!
//! Backends in this domain inconsistently wrap responses 1-2 levels deep:
//! a direct object, `{data: X}`, or `{data: {data: X}}` for nested report
//! payloads. List payloads may arrive as bare arrays, `{data: []}`, or a
//! full paginated envelope.

use serde_json::Value;

use super::guards::{as_array, as_finite_f64, is_record};

/// Maximum envelope nesting observed in the wild.
///
/// Empirical bound, not derived from a documented protocol. Bounding the
/// unwrap prevents infinite descent on pathological input and avoids
/// over-unwrapping legitimate objects that happen to carry a `data` property
/// further down.
pub const MAX_UNWRAP_DEPTH: usize = 3;

/// Strip up to [`MAX_UNWRAP_DEPTH`] levels of `{data: ...}` envelope
/// wrapping.
///
/// Known limitation: a terminal record that legitimately holds a meaningful
/// `data` field is unwrapped one level too far. Callers living with that
/// shape must not route it through here.
pub fn unwrap_payload(value: &Value) -> &Value {
    let mut cursor = value;
    for _ in 0..MAX_UNWRAP_DEPTH {
        match cursor.get("data") {
            Some(inner) if is_record(cursor) => cursor = inner,
            _ => break,
        }
    }
    cursor
}

/// Coerce a payload into a list, tolerating every observed list shape.
///
/// Absence of a list is an empty array, never an error.
pub fn to_array_payload(value: &Value) -> Vec<Value> {
    let unwrapped = unwrap_payload(value);

    if let Some(items) = as_array(unwrapped) {
        return items.clone();
    }

    if is_record(unwrapped) {
        for key in ["data", "items"] {
            if let Some(items) = unwrapped.get(key).and_then(as_array) {
                return items.clone();
            }
        }
    }

    Vec::new()
}

/// Canonical paginated list envelope
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    pub data: Vec<Value>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageEnvelope {
    fn empty() -> Self {
        Self {
            data: Vec::new(),
            page: 1,
            limit: 1,
            total: 0,
            total_pages: 1,
        }
    }
}

/// Normalize any observed list-response shape into a [`PageEnvelope`].
///
/// Invariants on the result: `page >= 1`, `limit >= 1`,
/// `total >= data.len()`, `total_pages >= 1`.
pub fn normalize_paginated(payload: &Value) -> PageEnvelope {
    // Legacy bare-array list: synthesize a single page
    if let Some(items) = as_array(payload) {
        let len = items.len() as u64;
        return PageEnvelope {
            data: items.clone(),
            page: 1,
            limit: len.max(1),
            total: len,
            total_pages: 1,
        };
    }

    if !is_record(payload) {
        return PageEnvelope::empty();
    }

    let Some(data) = payload.get("data").and_then(as_array) else {
        return PageEnvelope::empty();
    };

    let len = data.len() as u64;
    let page = read_count(payload, "page").unwrap_or(1).max(1);
    let limit = read_count(payload, "limit").unwrap_or(len).max(1);
    let declared_total = read_count(payload, "total").unwrap_or(0);
    let total = declared_total.max(len);
    let declared_pages = read_count(payload, "totalPages").unwrap_or(0);
    let computed_pages = total.div_ceil(limit);

    PageEnvelope {
        data: data.clone(),
        page,
        limit,
        total,
        total_pages: computed_pages.max(declared_pages).max(1),
    }
}

/// Normalize a full list response, tolerating envelope wrapping around the
/// paginated payload.
///
/// Unlike [`unwrap_payload`], descent stops before consuming the paginated
/// record itself: `{data: {data: [...], page, ...}}` unwraps to the inner
/// record, while `{data: [...], page, ...}` is left intact so the page
/// counters survive.
pub fn paginated_envelope(response: &Value) -> PageEnvelope {
    let mut cursor = response;
    for _ in 0..MAX_UNWRAP_DEPTH {
        match cursor.get("data") {
            Some(inner) if is_record(inner) => cursor = inner,
            _ => break,
        }
    }
    normalize_paginated(cursor)
}

/// Non-negative integer field read with truncation
fn read_count(record: &Value, key: &str) -> Option<u64> {
    record
        .get(key)
        .and_then(as_finite_f64)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc() as u64)
}
