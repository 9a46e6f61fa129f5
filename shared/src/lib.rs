//! Shared types for the menu engine
//!
//! Document models, order records and the unified error system used by
//! the engine and any presentation layer talking to it.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
