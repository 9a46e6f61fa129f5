//! Document store abstraction
//!
//! The engine's only persistence boundary. Reads are live full-snapshot
//! subscriptions; writes are individual async calls that either succeed
//! or leave the engine's state untouched (offline fallback aside).
//!
//! # Collections
//!
//! | Collection | Key | Content |
//! |------------|-----|---------|
//! | `menu_item` | item id | [`MenuItem`] |
//! | `category_settings` | category name | [`CategoryConfig`], ordered by `order` |
//! | `orders` | order id | [`Order`]; subscriptions see Live only, newest first |
//! | `menu_settings/main` | singleton | [`AppearancePatch`] |
//! | `cart_settings/contact_social` | singleton | [`ContactSettings`] |

mod error;
mod memory;
mod subscription;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use subscription::{Subscription, SyncTask, spawn_follow, spawn_sync};

use async_trait::async_trait;
use shared::models::{AppearancePatch, CategoryConfig, ContactSettings, MenuItem};
use shared::order::{Order, OrderStatus};

pub const MENU_ITEMS: &str = "menu_item";
pub const CATEGORIES: &str = "category_settings";
pub const ORDERS: &str = "orders";
pub const APPEARANCE: (&str, &str) = ("menu_settings", "main");
pub const CONTACT: (&str, &str) = ("cart_settings", "contact_social");

/// Where a write ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Accepted by the store; the next snapshot reflects it
    Remote,
    /// Store unreachable; applied to local state only
    Offline,
}

/// Document store operations used by the engine
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // ========== Live queries ==========

    fn subscribe_menu_items(&self) -> Subscription<Vec<MenuItem>>;

    /// Category configs sorted by `order` (missing order last)
    fn subscribe_categories(&self) -> Subscription<Vec<CategoryConfig>>;

    /// Live orders, newest first
    fn subscribe_live_orders(&self) -> Subscription<Vec<Order>>;

    fn subscribe_appearance(&self) -> Subscription<Option<AppearancePatch>>;

    fn subscribe_contact(&self) -> Subscription<Option<ContactSettings>>;

    // ========== Writes ==========

    /// Create or replace a menu item; an empty id gets a generated one
    async fn upsert_menu_item(&self, item: MenuItem) -> StoreResult<MenuItem>;

    async fn delete_menu_item(&self, id: &str) -> StoreResult<()>;

    /// Create an order; the store assigns the id
    async fn create_order(&self, order: Order) -> StoreResult<Order>;

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> StoreResult<()>;

    /// Create or replace a category config keyed by its name
    async fn put_category(&self, config: CategoryConfig) -> StoreResult<()>;

    async fn delete_category(&self, name: &str) -> StoreResult<()>;

    /// Merge fields into the appearance singleton
    async fn merge_appearance(&self, patch: AppearancePatch) -> StoreResult<()>;

    /// Merge fields into the contact singleton
    async fn merge_contact(&self, contact: ContactSettings) -> StoreResult<()>;
}
