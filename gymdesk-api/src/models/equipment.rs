//! Equipment / inventory canonical record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::resolve::{pick_bool, pick_count, pick_enum, pick_money, pick_str, CaseFold};

/// Allowed equipment categories; anything else normalizes to `accessories`
pub const EQUIPMENT_CATEGORIES: &[&str] = &[
    "cardio",
    "strength",
    "free-weights",
    "machines",
    "accessories",
];

/// Reorder threshold assumed when the payload carries none
const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// A piece of sellable or rentable gym inventory.
///
/// `is_low_stock` is taken from the payload only when it is a strict
/// boolean; otherwise it is derived once from
/// `stock_quantity <= low_stock_threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: String,
    pub name: String,
    /// One of [`EQUIPMENT_CATEGORIES`]
    pub category: String,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub is_low_stock: bool,
    pub unit_price: f64,
}

impl EquipmentRecord {
    pub fn from_value(raw: &Value) -> Self {
        let stock_quantity = pick_count(raw, &["stockQuantity", "stock", "quantity"])
            .unwrap_or(0)
            .max(0);
        let low_stock_threshold = pick_count(raw, &["lowStockThreshold", "reorderLevel"])
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
            .max(0);

        Self {
            id: pick_str(raw, &["id", "_id", "productId"]).unwrap_or_default(),
            name: pick_str(raw, &["name", "productName", "title"])
                .unwrap_or_else(|| "Untitled item".to_string()),
            category: pick_enum(
                raw,
                &["category", "equipmentType", "type"],
                EQUIPMENT_CATEGORIES,
                CaseFold::Lower,
                "accessories",
            ),
            stock_quantity,
            low_stock_threshold,
            is_low_stock: pick_bool(raw, &["isLowStock", "lowStock"])
                .unwrap_or(stock_quantity <= low_stock_threshold),
            unit_price: pick_money(raw, &["unitPrice", "price", "amount"]).max(0.0),
        }
    }
}
