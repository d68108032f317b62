//! Trainer canonical record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_bool, pick_str};

use super::resolve_person_name;

/// A trainer on staff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub specialty: Option<String>,
    /// Strict boolean only; anything else defaults to active
    pub active: bool,
}

impl TrainerRecord {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            id: pick_str(raw, &["id", "_id", "trainerId"]).unwrap_or_default(),
            full_name: resolve_person_name(raw, &["fullName", "name", "trainerName"])
                .unwrap_or_else(|| "Unknown trainer".to_string()),
            email: pick_str(raw, &["email", "emailAddress"]).map(|e| e.to_lowercase()),
            specialty: pick_str(raw, &["specialty", "specialization", "focus"]),
            active: pick_bool(raw, &["active", "isActive"]).unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_strict_bool_default_true() {
        assert!(TrainerRecord::from_value(&json!({})).active);
        assert!(TrainerRecord::from_value(&json!({"active": "no"})).active);
        assert!(!TrainerRecord::from_value(&json!({"isActive": false})).active);
    }

    #[test]
    fn test_specialty_aliases() {
        let trainer = TrainerRecord::from_value(&json!({"specialization": "Powerlifting"}));
        assert_eq!(trainer.specialty, Some("Powerlifting".to_string()));
    }

    #[test]
    fn test_totality_on_garbage() {
        let trainer = TrainerRecord::from_value(&json!(7));
        assert_eq!(trainer.full_name, "Unknown trainer");
        assert!(trainer.active);
    }
}
