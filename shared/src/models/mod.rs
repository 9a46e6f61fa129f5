//! Data models
//!
//! Document types shared between the engine and the presentation layer.
//! Documents are JSON with camelCase field names; ids are strings assigned
//! by the document store.

pub mod category;
pub mod menu_item;
pub mod settings;

// Re-exports
pub use category::*;
pub use menu_item::*;
pub use settings::*;
