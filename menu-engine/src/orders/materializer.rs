//! Cart → Order snapshot
//!
//! Every OrderItem is priced from the line's own item snapshot, independently
//! of the resolver.

use super::error::{OrderError, OrderResult};
use crate::cart::{Cart, CartLine};
use crate::pricing::round_display;
use rust_decimal::Decimal;
use shared::order::{AddonCharge, DEFAULT_SIZE_LABEL, Order, OrderItem, OrderStatus};

/// Freeze one cart line
pub fn order_item_from_line(line: &CartLine) -> OrderItem {
    let item = line.item();
    let (size, base_price) = match line.selected_size() {
        Some(size) => (size.name.clone(), size.price),
        None => (DEFAULT_SIZE_LABEL.to_string(), item.price),
    };
    let addons: Vec<AddonCharge> = line
        .selected_addons()
        .into_iter()
        .map(|addon| AddonCharge {
            name: addon.name.clone(),
            price: addon.price,
        })
        .collect();
    let addon_sum: Decimal = addons.iter().map(|a| a.price).sum();
    let total_price = (base_price + addon_sum) * Decimal::from(line.quantity());

    OrderItem {
        name: item.name.clone(),
        quantity: line.quantity(),
        size,
        base_price,
        addons,
        total_price,
    }
}

/// Build a Live order from a non-empty cart
///
/// The id is left empty for the store to assign. `total_amount` is the
/// rounded sum of the exact item totals.
pub fn materialize(cart: &Cart, table_number: impl Into<String>, created_at: i64) -> OrderResult<Order> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let items: Vec<OrderItem> = cart.lines().iter().map(order_item_from_line).collect();
    let total: Decimal = items.iter().map(|i| i.total_price).sum();

    Ok(Order {
        id: String::new(),
        table_number: table_number.into(),
        items,
        status: OrderStatus::Live,
        created_at,
        total_amount: Some(round_display(total)),
    })
}
