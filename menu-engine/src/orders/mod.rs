//! Orders: materialization, lifecycle and the live order manager

mod error;
pub mod lifecycle;
pub mod manager;
pub mod materializer;

pub use error::{OrderError, OrderResult};
pub use manager::{OrderEvent, OrdersManager, Placement};
pub use materializer::{materialize, order_item_from_line};
