//! OrdersManager - order placement and live order tracking
//!
//! # Placement Flow
//!
//! ```text
//! place_order(cart, table)
//!     ├─ 1. Materialize (empty cart → EmptyCart, nothing written)
//!     ├─ 2. store.create_order
//!     │     ├─ Ok            → clear cart, Remote
//!     │     ├─ Unavailable   → local id, prepend to live list, clear cart, Offline
//!     │     └─ other error   → cart untouched, error surfaced
//!     └─ 3. Broadcast OrderEvent
//! ```

use super::error::{OrderError, OrderResult};
use super::lifecycle::ensure_transition;
use super::materializer::materialize;
use crate::cart::Cart;
use crate::store::{DocumentStore, WriteMode};
use chrono::Utc;
use parking_lot::RwLock;
use shared::order::{Order, OrderStatus, table_label};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Terminal orders remembered for status checks, oldest dropped first
const CLOSED_HISTORY: usize = 256;

/// Notification sent after an order changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    Placed { order_id: String, mode: WriteMode },
    StatusChanged {
        order_id: String,
        status: OrderStatus,
        mode: WriteMode,
    },
}

/// Outcome of a successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub order: Order,
    pub mode: WriteMode,
}

/// Places orders and mirrors the store's live order list
pub struct OrdersManager {
    store: Arc<dyn DocumentStore>,
    /// Live orders, newest first
    live: Arc<RwLock<Vec<Order>>>,
    /// Recent orders this session moved to a terminal status, oldest first
    closed: Arc<RwLock<VecDeque<(String, OrderStatus)>>>,
    offline_fallback: bool,
    event_tx: broadcast::Sender<OrderEvent>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("live_count", &self.live.read().len())
            .field("closed_count", &self.closed.read().len())
            .field("offline_fallback", &self.offline_fallback)
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl OrdersManager {
    pub fn new(store: Arc<dyn DocumentStore>, offline_fallback: bool, event_buffer: usize) -> Self {
        let (event_tx, _) = broadcast::channel(event_buffer.max(1));
        Self {
            store,
            live: Arc::new(RwLock::new(Vec::new())),
            closed: Arc::new(RwLock::new(VecDeque::new())),
            offline_fallback,
            event_tx,
        }
    }

    /// Subscribe to order notifications
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: OrderEvent) {
        // No receivers is normal when no screen is listening
        let _ = self.event_tx.send(event);
    }

    /// Snapshot the cart into a Live order and persist it
    ///
    /// A blank or missing table id is recorded as walk-in. On success the
    /// cart is emptied; on failure it is left as it was.
    pub async fn place_order(&self, cart: &mut Cart, table_id: Option<&str>) -> OrderResult<Placement> {
        let created_at = Utc::now().timestamp_millis();
        let order = materialize(cart, table_label(table_id), created_at)?;

        match self.store.create_order(order.clone()).await {
            Ok(saved) => {
                cart.clear();
                tracing::info!(
                    order_id = %saved.id,
                    table = %saved.table_number,
                    items = saved.items.len(),
                    total = ?saved.total_amount,
                    "Order placed"
                );
                self.emit(OrderEvent::Placed {
                    order_id: saved.id.clone(),
                    mode: WriteMode::Remote,
                });
                Ok(Placement {
                    order: saved,
                    mode: WriteMode::Remote,
                })
            }
            Err(e) if e.is_unavailable() && self.offline_fallback => {
                let mut local = order;
                local.id = format!("local-{}", uuid::Uuid::new_v4().simple());
                self.live.write().insert(0, local.clone());
                cart.clear();
                tracing::warn!(order_id = %local.id, error = %e, "Store unavailable, order kept locally");
                self.emit(OrderEvent::Placed {
                    order_id: local.id.clone(),
                    mode: WriteMode::Offline,
                });
                Ok(Placement {
                    order: local,
                    mode: WriteMode::Offline,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to place order");
                Err(e.into())
            }
        }
    }

    pub async fn complete_order(&self, order_id: &str) -> OrderResult<WriteMode> {
        self.set_status(order_id, OrderStatus::Completed).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> OrderResult<WriteMode> {
        self.set_status(order_id, OrderStatus::Cancelled).await
    }

    async fn set_status(&self, order_id: &str, to: OrderStatus) -> OrderResult<WriteMode> {
        let from = self.current_status(order_id)?;
        ensure_transition(order_id, from, to)?;

        let mode = match self.store.update_order_status(order_id, to).await {
            Ok(()) => WriteMode::Remote,
            Err(e) if e.is_unavailable() && self.offline_fallback => {
                tracing::warn!(order_id, status = %to, error = %e, "Store unavailable, status applied locally");
                WriteMode::Offline
            }
            Err(e) => {
                tracing::error!(order_id, status = %to, error = %e, "Failed to update order status");
                return Err(e.into());
            }
        };

        self.live.write().retain(|o| o.id != order_id);
        self.remember_closed(order_id, to);
        tracing::info!(order_id, from = %from, to = %to, mode = ?mode, "Order status changed");
        self.emit(OrderEvent::StatusChanged {
            order_id: order_id.to_string(),
            status: to,
            mode,
        });
        Ok(mode)
    }

    /// Latest known status; terminal orders are remembered after they leave the live list
    fn current_status(&self, order_id: &str) -> OrderResult<OrderStatus> {
        if let Some(order) = self.live.read().iter().find(|o| o.id == order_id) {
            return Ok(order.status);
        }
        self.closed
            .read()
            .iter()
            .find(|(id, _)| id == order_id)
            .map(|(_, status)| *status)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    fn remember_closed(&self, order_id: &str, status: OrderStatus) {
        let mut closed = self.closed.write();
        closed.retain(|(id, _)| id != order_id);
        if closed.len() == CLOSED_HISTORY {
            closed.pop_front();
        }
        closed.push_back((order_id.to_string(), status));
    }

    /// Replace the live list with a store snapshot
    pub fn apply_snapshot(&self, orders: Vec<Order>) {
        replace_live(&self.live, orders);
    }

    /// Live orders, newest first
    pub fn live_orders(&self) -> Vec<Order> {
        self.live.read().clone()
    }

    pub fn find(&self, order_id: &str) -> Option<Order> {
        self.live.read().iter().find(|o| o.id == order_id).cloned()
    }

    /// Closure that feeds store snapshots into this manager
    pub fn snapshot_sink(&self) -> impl Fn(Vec<Order>) + Send + 'static {
        let live = self.live.clone();
        move |orders| replace_live(&live, orders)
    }
}

fn replace_live(live: &RwLock<Vec<Order>>, mut orders: Vec<Order>) {
    orders.retain(Order::is_live);
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tracing::debug!(count = orders.len(), "Live orders snapshot applied");
    *live.write() = orders;
}

#[cfg(test)]
mod tests;
