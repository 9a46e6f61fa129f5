//! Pricing: unit price resolution and money display

pub mod money;
pub mod resolver;

pub use money::{format_price, round_display};
pub use resolver::{addons_total, base_price, resolve_unit_price};
