//! In-memory document store
//!
//! Documents are kept as JSON values, the way a remote document database
//! holds them, and decoded on every publish. A document that fails to
//! decode is skipped (and logged) instead of poisoning the whole snapshot.

use super::{
    APPEARANCE, CATEGORIES, CONTACT, DocumentStore, MENU_ITEMS, ORDERS, StoreError, StoreResult,
    Subscription,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{AppearancePatch, CategoryConfig, ContactSettings, MenuItem};
use shared::order::{Order, OrderStatus};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

type Collection = BTreeMap<String, Value>;

/// Process-local [`DocumentStore`]
pub struct MemoryStore {
    /// collection -> id -> document
    docs: RwLock<HashMap<String, Collection>>,
    available: AtomicBool,
    read_only: AtomicBool,
    menu_tx: watch::Sender<Vec<MenuItem>>,
    categories_tx: watch::Sender<Vec<CategoryConfig>>,
    orders_tx: watch::Sender<Vec<Order>>,
    appearance_tx: watch::Sender<Option<AppearancePatch>>,
    contact_tx: watch::Sender<Option<ContactSettings>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let docs = self.docs.read();
        let counts: BTreeMap<&str, usize> =
            docs.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        f.debug_struct("MemoryStore")
            .field("available", &self.is_available())
            .field("collections", &counts)
            .finish()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            read_only: AtomicBool::new(false),
            menu_tx: watch::channel(Vec::new()).0,
            categories_tx: watch::channel(Vec::new()).0,
            orders_tx: watch::channel(Vec::new()).0,
            appearance_tx: watch::channel(None).0,
            contact_tx: watch::channel(None).0,
        }
    }

    /// Simulate losing (or regaining) the connection; writes fail while unavailable
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
        tracing::info!(available, "Memory store availability changed");
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Refuse writes while staying reachable (like a permissions failure)
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Write a raw document, bypassing availability and typing
    pub fn insert_raw(&self, collection: &str, id: &str, doc: Value) {
        self.docs
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        self.publish(collection);
    }

    /// Raw document as stored
    pub fn document(&self, collection: &str, id: &str) -> Option<Value> {
        self.docs.read().get(collection)?.get(id).cloned()
    }

    pub fn document_count(&self, collection: &str) -> usize {
        self.docs.read().get(collection).map_or(0, BTreeMap::len)
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if !self.is_available() {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("memory store is read-only".into()));
        }
        Ok(())
    }

    fn put<T: Serialize>(&self, collection: &str, id: &str, value: &T) -> StoreResult<()> {
        let doc = serde_json::to_value(value)?;
        self.docs
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        self.publish(collection);
        Ok(())
    }

    fn remove(&self, collection: &str, id: &str) {
        let removed = self
            .docs
            .write()
            .get_mut(collection)
            .and_then(|c| c.remove(id))
            .is_some();
        if removed {
            self.publish(collection);
        }
    }

    fn merge(&self, (collection, id): (&str, &str), patch: Value) {
        let Value::Object(fields) = patch else {
            tracing::warn!(collection, id, "Ignoring non-object merge patch");
            return;
        };
        {
            let mut docs = self.docs.write();
            let doc = docs
                .entry(collection.to_string())
                .or_default()
                .entry(id.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
            if !doc.is_object() {
                *doc = Value::Object(Default::default());
            }
            if let Some(existing) = doc.as_object_mut() {
                for (k, v) in fields {
                    if !v.is_null() {
                        existing.insert(k, v);
                    }
                }
            }
        }
        self.publish(collection);
    }

    /// Decode every document of a collection, skipping broken ones
    fn decode_all<T: DeserializeOwned>(&self, collection: &str) -> Vec<(String, T)> {
        let docs = self.docs.read();
        let Some(coll) = docs.get(collection) else {
            return Vec::new();
        };
        coll.iter()
            .filter_map(|(id, doc)| match serde_json::from_value::<T>(doc.clone()) {
                Ok(value) => Some((id.clone(), value)),
                Err(e) => {
                    tracing::warn!(collection, id = %id, error = %e, "Skipping undecodable document");
                    None
                }
            })
            .collect()
    }

    fn decode_singleton<T: DeserializeOwned>(&self, (collection, id): (&str, &str)) -> Option<T> {
        let doc = self.document(collection, id)?;
        match serde_json::from_value(doc) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(collection, id, error = %e, "Skipping undecodable document");
                None
            }
        }
    }

    /// Push a fresh full snapshot of `collection` to its subscribers
    fn publish(&self, collection: &str) {
        match collection {
            MENU_ITEMS => {
                let items = self
                    .decode_all::<MenuItem>(MENU_ITEMS)
                    .into_iter()
                    .map(|(id, mut item)| {
                        item.id = id;
                        item
                    })
                    .collect();
                self.menu_tx.send_replace(items);
            }
            CATEGORIES => {
                let mut configs: Vec<CategoryConfig> = self
                    .decode_all::<CategoryConfig>(CATEGORIES)
                    .into_iter()
                    .map(|(_, cfg)| cfg)
                    .collect();
                configs.sort_by(|a, b| {
                    (a.order.is_none(), a.order, &a.category)
                        .cmp(&(b.order.is_none(), b.order, &b.category))
                });
                self.categories_tx.send_replace(configs);
            }
            ORDERS => {
                let mut live: Vec<Order> = self
                    .decode_all::<Order>(ORDERS)
                    .into_iter()
                    .map(|(id, mut order)| {
                        order.id = id;
                        order
                    })
                    .filter(Order::is_live)
                    .collect();
                live.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
                self.orders_tx.send_replace(live);
            }
            c if c == APPEARANCE.0 => {
                self.appearance_tx
                    .send_replace(self.decode_singleton(APPEARANCE));
            }
            c if c == CONTACT.0 => {
                self.contact_tx.send_replace(self.decode_singleton(CONTACT));
            }
            other => tracing::debug!(collection = other, "No subscribers for collection"),
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn subscribe_menu_items(&self) -> Subscription<Vec<MenuItem>> {
        Subscription::new(self.menu_tx.subscribe())
    }

    fn subscribe_categories(&self) -> Subscription<Vec<CategoryConfig>> {
        Subscription::new(self.categories_tx.subscribe())
    }

    fn subscribe_live_orders(&self) -> Subscription<Vec<Order>> {
        Subscription::new(self.orders_tx.subscribe())
    }

    fn subscribe_appearance(&self) -> Subscription<Option<AppearancePatch>> {
        Subscription::new(self.appearance_tx.subscribe())
    }

    fn subscribe_contact(&self) -> Subscription<Option<ContactSettings>> {
        Subscription::new(self.contact_tx.subscribe())
    }

    async fn upsert_menu_item(&self, mut item: MenuItem) -> StoreResult<MenuItem> {
        self.ensure_available()?;
        if item.id.is_empty() {
            item.id = new_id();
        }
        self.put(MENU_ITEMS, &item.id, &item)?;
        Ok(item)
    }

    async fn delete_menu_item(&self, id: &str) -> StoreResult<()> {
        self.ensure_available()?;
        self.remove(MENU_ITEMS, id);
        Ok(())
    }

    async fn create_order(&self, mut order: Order) -> StoreResult<Order> {
        self.ensure_available()?;
        order.id = new_id();
        self.put(ORDERS, &order.id, &order)?;
        Ok(order)
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> StoreResult<()> {
        self.ensure_available()?;
        let status = serde_json::to_value(status)?;
        {
            let mut docs = self.docs.write();
            let doc = docs
                .get_mut(ORDERS)
                .and_then(|c| c.get_mut(id))
                .and_then(Value::as_object_mut)
                .ok_or_else(|| StoreError::not_found(ORDERS, id))?;
            doc.insert("status".to_string(), status);
        }
        self.publish(ORDERS);
        Ok(())
    }

    async fn put_category(&self, config: CategoryConfig) -> StoreResult<()> {
        self.ensure_available()?;
        if config.category.trim().is_empty() {
            return Err(StoreError::Rejected("category name must not be empty".into()));
        }
        self.put(CATEGORIES, &config.category, &config)
    }

    async fn delete_category(&self, name: &str) -> StoreResult<()> {
        self.ensure_available()?;
        self.remove(CATEGORIES, name);
        Ok(())
    }

    async fn merge_appearance(&self, patch: AppearancePatch) -> StoreResult<()> {
        self.ensure_available()?;
        let value = serde_json::to_value(&patch)?;
        self.merge(APPEARANCE, value);
        Ok(())
    }

    async fn merge_contact(&self, contact: ContactSettings) -> StoreResult<()> {
        self.ensure_available()?;
        let value = serde_json::to_value(&contact)?;
        self.merge(CONTACT, value);
        Ok(())
    }
}
