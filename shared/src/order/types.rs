//! Order line types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Size label recorded when the line has no size selected
pub const DEFAULT_SIZE_LABEL: &str = "Regular";

/// Table label recorded when the session has no table
pub const WALK_IN_TABLE: &str = "Walk-in";

// ============================================================================
// Order Item
// ============================================================================

/// 已选加料（名称 + 下单时价格）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonCharge {
    pub name: String,
    pub price: Decimal,
}

/// Frozen order line
///
/// Copied out of the cart at placement time; later catalog edits never
/// touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Size name, or [`DEFAULT_SIZE_LABEL`]
    pub size: String,
    /// Size price if a size was chosen, else the item price
    pub base_price: Decimal,
    #[serde(default)]
    pub addons: Vec<AddonCharge>,
    /// (base_price + addon prices) * quantity
    pub total_price: Decimal,
}

impl OrderItem {
    /// Unit price including add-ons
    pub fn unit_price(&self) -> Decimal {
        self.base_price + self.addons.iter().map(|a| a.price).sum::<Decimal>()
    }
}

/// Normalize a session table id; blank means walk-in
pub fn table_label(table_id: Option<&str>) -> String {
    match table_id.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => WALK_IN_TABLE.to_string(),
    }
}
