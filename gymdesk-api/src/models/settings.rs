//! Gym settings canonical record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_enum, pick_str, CaseFold};

/// Currencies the console can render; anything else normalizes to `USD`
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD"];

/// Facility-wide settings shown on the settings screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymSettings {
    pub gym_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    /// Free-form display string, e.g. "Mon-Fri 06:00-22:00"
    pub opening_hours: Option<String>,
    /// One of [`CURRENCIES`]
    pub currency: String,
}

impl GymSettings {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            gym_name: pick_str(raw, &["gymName", "name", "businessName"])
                .unwrap_or_else(|| "Unnamed gym".to_string()),
            contact_email: pick_str(raw, &["contactEmail", "email"]).map(|e| e.to_lowercase()),
            contact_phone: pick_str(raw, &["contactPhone", "phone"]),
            address: pick_str(raw, &["address", "location"]),
            opening_hours: pick_str(raw, &["openingHours", "hours"]),
            currency: pick_enum(
                raw,
                &["currency", "currencyCode"],
                CURRENCIES,
                CaseFold::Upper,
                "USD",
            ),
        }
    }
}
