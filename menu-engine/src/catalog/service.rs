//! CatalogService - cached menu, categories and site settings
//!
//! Caches are replaced wholesale by store snapshots. Admin writes go to
//! the store and come back through the next snapshot; when the store is
//! unreachable and offline fallback is on, the change is applied to the
//! caches directly and reported as [`WriteMode::Offline`].
//!
//! Every change to the item or category caches bumps a revision counter;
//! [`CatalogService::changes`] follows it so translations can be redone.

use super::draft::build_menu_item;
use super::error::{CatalogError, CatalogResult};
use super::filter::{MenuFilter, filter_items};
use crate::store::{DocumentStore, StoreResult, Subscription, WriteMode};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use parking_lot::RwLock;
use shared::models::{
    AppearancePatch, CategoryConfig, ContactSettings, MenuItem, MenuItemDraft, MenuItemFlag,
    SiteSettings,
};
use std::sync::Arc;
use tokio::sync::watch;

pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
    items: Arc<RwLock<Vec<MenuItem>>>,
    categories: Arc<RwLock<Vec<CategoryConfig>>>,
    settings: Arc<RwLock<SiteSettings>>,
    revision: Arc<watch::Sender<u64>>,
    offline_fallback: bool,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("items", &self.items.read().len())
            .field("categories", &self.categories.read().len())
            .field("revision", &*self.revision.borrow())
            .field("offline_fallback", &self.offline_fallback)
            .finish()
    }
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>, offline_fallback: bool) -> Self {
        let (revision, _) = watch::channel(0u64);
        Self {
            store,
            items: Arc::new(RwLock::new(Vec::new())),
            categories: Arc::new(RwLock::new(Vec::new())),
            settings: Arc::new(RwLock::new(SiteSettings::default())),
            revision: Arc::new(revision),
            offline_fallback,
        }
    }

    // ========== Snapshots ==========

    pub fn apply_items(&self, items: Vec<MenuItem>) {
        tracing::debug!(count = items.len(), "Menu snapshot applied");
        *self.items.write() = items;
        bump(&self.revision);
    }

    pub fn apply_categories(&self, categories: Vec<CategoryConfig>) {
        tracing::debug!(count = categories.len(), "Category snapshot applied");
        *self.categories.write() = categories;
        bump(&self.revision);
    }

    /// Overlay the appearance document onto the current settings
    pub fn apply_appearance(&self, patch: Option<AppearancePatch>) {
        if let Some(patch) = patch {
            self.settings.write().apply_appearance(&patch);
        }
    }

    /// Overlay the contact document onto the current settings
    pub fn apply_contact(&self, contact: Option<ContactSettings>) {
        if let Some(contact) = contact {
            self.settings.write().apply_contact(&contact);
        }
    }

    pub fn items_sink(&self) -> impl Fn(Vec<MenuItem>) + Send + 'static {
        let items = self.items.clone();
        let revision = self.revision.clone();
        move |snapshot| {
            *items.write() = snapshot;
            bump(&revision);
        }
    }

    pub fn categories_sink(&self) -> impl Fn(Vec<CategoryConfig>) + Send + 'static {
        let categories = self.categories.clone();
        let revision = self.revision.clone();
        move |snapshot| {
            *categories.write() = snapshot;
            bump(&revision);
        }
    }

    pub fn appearance_sink(&self) -> impl Fn(Option<AppearancePatch>) + Send + 'static {
        let settings = self.settings.clone();
        move |patch| {
            if let Some(patch) = patch {
                settings.write().apply_appearance(&patch);
            }
        }
    }

    pub fn contact_sink(&self) -> impl Fn(Option<ContactSettings>) + Send + 'static {
        let settings = self.settings.clone();
        move |contact| {
            if let Some(contact) = contact {
                settings.write().apply_contact(&contact);
            }
        }
    }

    /// Follows the item/category revision counter
    pub fn changes(&self) -> Subscription<u64> {
        Subscription::new(self.revision.subscribe())
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // ========== Reads ==========

    pub fn items(&self) -> Vec<MenuItem> {
        self.items.read().clone()
    }

    pub fn item(&self, id: &str) -> Option<MenuItem> {
        self.items.read().iter().find(|i| i.id == id).cloned()
    }

    pub fn categories(&self) -> Vec<CategoryConfig> {
        self.categories.read().clone()
    }

    /// Category names in display order
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .read()
            .iter()
            .map(|c| c.category.clone())
            .collect()
    }

    pub fn category(&self, name: &str) -> Option<CategoryConfig> {
        self.categories
            .read()
            .iter()
            .find(|c| c.category == name)
            .cloned()
    }

    pub fn settings(&self) -> SiteSettings {
        self.settings.read().clone()
    }

    pub fn filter(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        let items = self.items.read();
        filter_items(&items, filter).into_iter().cloned().collect()
    }

    // ========== Items ==========

    /// Create or edit an item from an admin draft
    pub async fn save_item(&self, draft: MenuItemDraft) -> CatalogResult<(MenuItem, WriteMode)> {
        let existing = match draft.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => Some(
                self.item(id)
                    .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))?,
            ),
            None => None,
        };
        let item = build_menu_item(draft, existing.as_ref())?;

        match self.settle("save_item", self.store.upsert_menu_item(item.clone()).await)? {
            Some(saved) => {
                tracing::info!(item_id = %saved.id, name = %saved.name, "Menu item saved");
                Ok((saved, WriteMode::Remote))
            }
            None => {
                let mut local = item;
                if local.id.is_empty() {
                    local.id = format!("local-{}", uuid::Uuid::new_v4().simple());
                }
                {
                    let mut items = self.items.write();
                    match items.iter_mut().find(|i| i.id == local.id) {
                        Some(slot) => *slot = local.clone(),
                        None => items.push(local.clone()),
                    }
                }
                bump(&self.revision);
                Ok((local, WriteMode::Offline))
            }
        }
    }

    pub async fn delete_item(&self, id: &str) -> CatalogResult<WriteMode> {
        if self.item(id).is_none() {
            return Err(CatalogError::ItemNotFound(id.to_string()));
        }
        let mode = match self.settle("delete_item", self.store.delete_menu_item(id).await)? {
            Some(()) => WriteMode::Remote,
            None => {
                self.items.write().retain(|i| i.id != id);
                bump(&self.revision);
                WriteMode::Offline
            }
        };
        tracing::info!(item_id = id, mode = ?mode, "Menu item deleted");
        Ok(mode)
    }

    /// Flip one of the item's independent flags
    pub async fn toggle_flag(&self, id: &str, flag: MenuItemFlag) -> CatalogResult<(MenuItem, WriteMode)> {
        let mut item = self
            .item(id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.to_string()))?;
        item.toggle_flag(flag);

        let mode = match self.settle("toggle_flag", self.store.upsert_menu_item(item.clone()).await)? {
            Some(_) => WriteMode::Remote,
            None => {
                if let Some(slot) = self.items.write().iter_mut().find(|i| i.id == id) {
                    *slot = item.clone();
                }
                bump(&self.revision);
                WriteMode::Offline
            }
        };
        tracing::info!(item_id = id, flag = ?flag, mode = ?mode, "Menu item flag toggled");
        Ok((item, mode))
    }

    // ========== Categories ==========

    /// Append a category with default appearance
    pub async fn add_category(&self, name: &str) -> CatalogResult<(CategoryConfig, WriteMode)> {
        let name = name.trim();
        validate_required_text(name, "category", MAX_NAME_LEN)?;
        if self.category(name).is_some() {
            return Err(CatalogError::CategoryExists(name.to_string()));
        }

        let order = i32::try_from(self.categories.read().len()).unwrap_or(i32::MAX - 1) + 1;
        let mut config = CategoryConfig::new(name, order);
        config.fallback_image = format!("https://picsum.photos/800/600?random={order}");

        let mode = match self.settle("add_category", self.store.put_category(config.clone()).await)? {
            Some(()) => WriteMode::Remote,
            None => {
                self.categories.write().push(config.clone());
                bump(&self.revision);
                WriteMode::Offline
            }
        };
        tracing::info!(category = name, order, mode = ?mode, "Category added");
        Ok((config, mode))
    }

    /// Replace a category's appearance settings
    pub async fn update_category(&self, mut config: CategoryConfig) -> CatalogResult<WriteMode> {
        let current = self
            .category(&config.category)
            .ok_or_else(|| CatalogError::CategoryNotFound(config.category.clone()))?;
        validate_optional_text(&Some(config.video_url.clone()), "videoUrl", MAX_URL_LEN)?;
        validate_optional_text(&Some(config.fallback_image.clone()), "fallbackImage", MAX_URL_LEN)?;
        config.overlay_opacity = config.clamped_opacity();
        if config.order.is_none() {
            config.order = current.order;
        }

        let mode = match self.settle("update_category", self.store.put_category(config.clone()).await)? {
            Some(()) => WriteMode::Remote,
            None => {
                if let Some(slot) = self
                    .categories
                    .write()
                    .iter_mut()
                    .find(|c| c.category == config.category)
                {
                    *slot = config.clone();
                }
                bump(&self.revision);
                WriteMode::Offline
            }
        };
        tracing::info!(category = %config.category, mode = ?mode, "Category updated");
        Ok(mode)
    }

    /// Remove a category; offline, its items go with it
    pub async fn delete_category(&self, name: &str) -> CatalogResult<WriteMode> {
        if self.category(name).is_none() {
            return Err(CatalogError::CategoryNotFound(name.to_string()));
        }
        let mode = match self.settle("delete_category", self.store.delete_category(name).await)? {
            Some(()) => WriteMode::Remote,
            None => {
                self.categories.write().retain(|c| c.category != name);
                self.items.write().retain(|i| i.category != name);
                bump(&self.revision);
                WriteMode::Offline
            }
        };
        tracing::info!(category = name, mode = ?mode, "Category deleted");
        Ok(mode)
    }

    // ========== Settings ==========

    pub async fn save_appearance(&self, patch: AppearancePatch) -> CatalogResult<WriteMode> {
        validate_optional_text(&patch.logo_url, "logoUrl", MAX_URL_LEN)?;
        validate_optional_text(&patch.hero_title, "heroText", MAX_NAME_LEN)?;
        validate_optional_text(&patch.hero_tagline, "heroTagline", MAX_NAME_LEN)?;
        validate_optional_text(&patch.hero_video_url, "heroVideoUrl", MAX_URL_LEN)?;

        let mode = match self.settle("save_appearance", self.store.merge_appearance(patch.clone()).await)? {
            Some(()) => WriteMode::Remote,
            None => WriteMode::Offline,
        };
        self.settings.write().apply_appearance(&patch);
        tracing::info!(mode = ?mode, "Appearance settings saved");
        Ok(mode)
    }

    pub async fn save_contact(&self, contact: ContactSettings) -> CatalogResult<WriteMode> {
        validate_optional_text(&Some(contact.support_email.clone()), "supportEmail", MAX_EMAIL_LEN)?;
        validate_optional_text(&Some(contact.support_phone.clone()), "supportPhone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&Some(contact.instagram_url.clone()), "instagramUrl", MAX_URL_LEN)?;
        validate_optional_text(&Some(contact.google_review_url.clone()), "googleReviewUrl", MAX_URL_LEN)?;

        let mode = match self.settle("save_contact", self.store.merge_contact(contact.clone()).await)? {
            Some(()) => WriteMode::Remote,
            None => WriteMode::Offline,
        };
        self.settings.write().contact = contact;
        tracing::info!(mode = ?mode, "Contact settings saved");
        Ok(mode)
    }

    /// `Ok(None)` means the store was unreachable and the caller should apply locally
    fn settle<T>(&self, op: &'static str, result: StoreResult<T>) -> CatalogResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_unavailable() && self.offline_fallback => {
                tracing::warn!(op, error = %e, "Store unavailable, applying locally");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(op, error = %e, "Catalog write failed");
                Err(e.into())
            }
        }
    }
}

fn bump(revision: &watch::Sender<u64>) {
    revision.send_modify(|r| *r += 1);
}

#[cfg(test)]
mod tests;
