//! Order records
//!
//! - [`Order`]: immutable snapshot of a cart at placement time
//! - [`OrderItem`]: one frozen line of an order
//! - [`OrderStatus`]: Live → Completed / Cancelled lifecycle

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{Order, OrderStatus};
pub use types::*;
