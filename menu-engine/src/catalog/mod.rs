//! Catalog: menu items, categories and site settings

pub mod draft;
mod error;
pub mod filter;
mod service;

pub use draft::{build_menu_item, draft_from_item};
pub use error::{CatalogError, CatalogResult};
pub use filter::{DietFilter, MenuFilter, filter_items};
pub use service::CatalogService;
