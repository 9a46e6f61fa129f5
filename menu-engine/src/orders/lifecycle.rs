//! Order status transitions
//!
//! ```text
//! Live ──complete──▶ Completed
//!   └───cancel────▶ Cancelled
//! ```
//!
//! Both targets are terminal; there is no reopen.

use super::error::{OrderError, OrderResult};
use shared::order::{Order, OrderStatus};

/// Check that order `id` may move from `from` to `to`
pub fn ensure_transition(id: &str, from: OrderStatus, to: OrderStatus) -> OrderResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition {
            id: id.to_string(),
            from,
            to,
        })
    }
}

/// Move `order` to `to`, leaving it untouched when the move is not allowed
pub fn transition(order: &mut Order, to: OrderStatus) -> OrderResult<()> {
    ensure_transition(&order.id, order.status, to)?;
    tracing::info!(order_id = %order.id, from = %order.status, to = %to, "Order status changed");
    order.status = to;
    Ok(())
}
