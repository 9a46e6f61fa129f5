//! Order record and status lifecycle

use super::types::OrderItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Live → Completed and Live → Cancelled are the only transitions;
/// both targets are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Live,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Live)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Live, OrderStatus::Completed) | (OrderStatus::Live, OrderStatus::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Live => "Live",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placed order, stored in the `orders` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Document id (empty until the store assigns one)
    #[serde(default)]
    pub id: String,
    pub table_number: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    /// Creation time, epoch millis
    pub created_at: i64,
    /// Rounded order total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

impl Order {
    /// Sum of the unrounded item totals
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|i| i.total_price).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_live(&self) -> bool {
        self.status == OrderStatus::Live
    }
}
