use super::Config;
use crate::auth::{AdminGate, DenyAllGate, PasswordGate};
use crate::cart::{AddOutcome, Cart, LineKey, QuantityChange, ToggleOutcome};
use crate::catalog::{CatalogError, CatalogService, MenuFilter, filter_items};
use crate::orders::{OrdersManager, Placement};
use crate::pricing::format_price;
use crate::store::{DocumentStore, SyncTask, WriteMode, spawn_follow, spawn_sync};
use crate::translation::{Localizer, TranslationOutcome, Translator};
use crate::utils::validation::MAX_PASSWORD_LEN;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{
    AppearancePatch, CategoryConfig, ContactSettings, MenuItem, MenuItemDraft, MenuItemFlag,
};
use std::sync::Arc;

/// 应用根 - 持有所有服务和当前会话
///
/// 共享服务使用 Arc 持有，后台同步任务写入它们的缓存；
/// 购物车、桌号和管理模式属于会话本身，通过 `&mut self` 修改。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn DocumentStore> | 文档存储 |
/// | catalog | Arc<CatalogService> | 菜单/分类/站点设置缓存 |
/// | orders | Arc<OrdersManager> | 下单与实时订单 |
/// | localizer | Arc<Localizer> | 当前语言与翻译表 |
/// | gate | Arc<dyn AdminGate> | 管理模式校验 |
///
/// # 使用示例
///
/// ```ignore
/// let mut app = MenuApp::new(Config::from_env(), store, Arc::new(NoopTranslator))?;
/// app.start();
/// app.add_to_cart("m1", None, &["egg"])?;
/// let placement = app.place_order().await?;
/// app.stop().await;
/// ```
pub struct MenuApp {
    config: Config,
    store: Arc<dyn DocumentStore>,
    catalog: Arc<CatalogService>,
    orders: Arc<OrdersManager>,
    localizer: Arc<Localizer>,
    gate: Arc<dyn AdminGate>,
    cart: Cart,
    table_id: Option<String>,
    admin: bool,
    tasks: Vec<SyncTask>,
}

impl std::fmt::Debug for MenuApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuApp")
            .field("catalog", &self.catalog)
            .field("orders", &self.orders)
            .field("localizer", &self.localizer)
            .field("cart_lines", &self.cart.len())
            .field("table_id", &self.table_id)
            .field("admin", &self.admin)
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl MenuApp {
    /// 创建应用根
    ///
    /// 配置了 `admin_password_hash` 时使用 Argon2 校验，否则无法进入管理模式
    pub fn new(
        config: Config,
        store: Arc<dyn DocumentStore>,
        translator: Arc<dyn Translator>,
    ) -> AppResult<Self> {
        config.validate()?;
        let gate: Arc<dyn AdminGate> = match &config.admin_password_hash {
            Some(hash) => Arc::new(PasswordGate::from_phc(hash.clone())?),
            None => {
                tracing::warn!("ADMIN_PASSWORD_HASH not set, admin mode disabled");
                Arc::new(DenyAllGate)
            }
        };

        let catalog = Arc::new(CatalogService::new(store.clone(), config.offline_fallback));
        let orders = Arc::new(OrdersManager::new(
            store.clone(),
            config.offline_fallback,
            config.subscription_buffer,
        ));
        let localizer = Arc::new(Localizer::new(translator, config.default_language.clone()));

        Ok(Self {
            config,
            store,
            catalog,
            orders,
            localizer,
            gate,
            cart: Cart::new(),
            table_id: None,
            admin: false,
            tasks: Vec::new(),
        })
    }

    /// 替换管理模式校验器
    pub fn with_gate(mut self, gate: Arc<dyn AdminGate>) -> Self {
        self.gate = gate;
        self
    }

    // ========== 生命周期 ==========

    /// 启动存储订阅同步任务 (重复调用无效果)
    pub fn start(&mut self) {
        if !self.tasks.is_empty() {
            return;
        }
        self.tasks = vec![
            spawn_sync("menu_items", self.store.subscribe_menu_items(), self.catalog.items_sink()),
            spawn_sync(
                "categories",
                self.store.subscribe_categories(),
                self.catalog.categories_sink(),
            ),
            spawn_sync(
                "live_orders",
                self.store.subscribe_live_orders(),
                self.orders.snapshot_sink(),
            ),
            spawn_sync(
                "appearance",
                self.store.subscribe_appearance(),
                self.catalog.appearance_sink(),
            ),
            spawn_sync("contact", self.store.subscribe_contact(), self.catalog.contact_sink()),
            self.spawn_translation_refresh(),
        ];
        tracing::info!(tasks = self.tasks.len(), "Store sync started");
    }

    /// 停止所有同步任务并等待退出
    pub async fn stop(&mut self) {
        let tasks = std::mem::take(&mut self.tasks);
        let count = tasks.len();
        futures::future::join_all(tasks.into_iter().map(SyncTask::stop)).await;
        if count > 0 {
            tracing::info!(tasks = count, "Store sync stopped");
        }
    }

    /// 菜单或分类变化后重新翻译当前语言
    fn spawn_translation_refresh(&self) -> SyncTask {
        let localizer = self.localizer.clone();
        let catalog = self.catalog.clone();
        spawn_follow("translations", self.catalog.changes(), move |_revision| {
            let localizer = localizer.clone();
            let catalog = catalog.clone();
            async move {
                refresh_translations(&localizer, &catalog).await;
            }
        })
    }

    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|t| !t.is_finished())
    }

    /// 立即拉取一次所有订阅的最新快照
    ///
    /// 不会重新翻译；需要时随后调用 [`MenuApp::refresh_translations`]
    pub fn sync_now(&self) {
        self.catalog
            .apply_items(self.store.subscribe_menu_items().latest());
        self.catalog
            .apply_categories(self.store.subscribe_categories().latest());
        self.catalog
            .apply_appearance(self.store.subscribe_appearance().latest());
        self.catalog
            .apply_contact(self.store.subscribe_contact().latest());
        self.orders
            .apply_snapshot(self.store.subscribe_live_orders().latest());
    }

    // ========== 访问器 ==========

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn orders(&self) -> &OrdersManager {
        &self.orders
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    /// 设置会话桌号 (通常来自扫码链接)
    pub fn set_table_id(&mut self, table_id: Option<String>) {
        self.table_id = table_id.filter(|t| !t.trim().is_empty());
    }

    /// 按配置的货币符号显示金额
    pub fn format_price(&self, value: Decimal) -> String {
        format_price(&self.config.currency_symbol, value)
    }

    // ========== 管理模式 ==========

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn enter_admin(&mut self, secret: &str) -> AppResult<()> {
        if secret.is_empty() || secret.len() > MAX_PASSWORD_LEN || !self.gate.verify(secret) {
            tracing::warn!("Admin login rejected");
            return Err(AppError::invalid_credentials());
        }
        self.admin = true;
        tracing::info!("Admin mode entered");
        Ok(())
    }

    pub fn exit_admin(&mut self) {
        if self.admin {
            tracing::info!("Admin mode exited");
        }
        self.admin = false;
    }

    fn require_admin(&self) -> AppResult<()> {
        if self.admin {
            Ok(())
        } else {
            Err(AppError::admin_required())
        }
    }

    // ========== 菜单 ==========

    /// 当前视图的菜单项
    ///
    /// 顾客看到翻译后的文本；管理模式下看到原文并按管理规则过滤
    pub fn menu(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        let filter = MenuFilter {
            admin: self.admin,
            ..filter.clone()
        };
        let items = if self.admin {
            self.catalog.items()
        } else {
            self.localizer.localize_items(&self.catalog.items())
        };
        filter_items(&items, &filter).into_iter().cloned().collect()
    }

    /// 切换显示语言并拉取翻译
    pub async fn set_language(&self, language: &str) -> TranslationOutcome {
        let categories = self.catalog.category_names();
        let items = self.catalog.items();
        self.localizer.set_language(language, &categories, &items).await
    }

    /// 按当前菜单重新拉取当前语言的翻译；默认语言时返回 `None`
    pub async fn refresh_translations(&self) -> Option<TranslationOutcome> {
        refresh_translations(&self.localizer, &self.catalog).await
    }

    fn menu_item(&self, item_id: &str) -> AppResult<MenuItem> {
        self.catalog
            .item(item_id)
            .ok_or_else(|| CatalogError::ItemNotFound(item_id.to_string()).into())
    }

    // ========== 购物车 ==========

    pub fn add_to_cart(
        &mut self,
        item_id: &str,
        size_id: Option<&str>,
        addon_ids: &[&str],
    ) -> AppResult<AddOutcome> {
        let item = self.menu_item(item_id)?;
        Ok(self
            .cart
            .add_selection(&item, size_id, addon_ids.iter().copied())?)
    }

    /// 定制面板确认后加入购物车
    pub fn add_customized(
        &mut self,
        item_id: &str,
        size_id: Option<&str>,
        addon_ids: &[&str],
    ) -> AppResult<AddOutcome> {
        let item = self.menu_item(item_id)?;
        Ok(self
            .cart
            .add_customized(&item, size_id, addon_ids.iter().copied())?)
    }

    pub fn toggle_addon(&mut self, key: &LineKey, addon_id: &str) -> AppResult<ToggleOutcome> {
        Ok(self.cart.toggle_addon(key, addon_id)?)
    }

    pub fn update_quantity(&mut self, key: &LineKey, delta: i32) -> AppResult<QuantityChange> {
        Ok(self.cart.update_quantity(key, delta)?)
    }

    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        self.cart.remove_line(key).is_some()
    }

    pub fn cart_total(&self) -> String {
        self.format_price(self.cart.total())
    }

    // ========== 订单 ==========

    pub async fn place_order(&mut self) -> AppResult<Placement> {
        Ok(self
            .orders
            .place_order(&mut self.cart, self.table_id.as_deref())
            .await?)
    }

    pub async fn complete_order(&self, order_id: &str) -> AppResult<WriteMode> {
        self.require_admin()?;
        Ok(self.orders.complete_order(order_id).await?)
    }

    pub async fn cancel_order(&self, order_id: &str) -> AppResult<WriteMode> {
        self.require_admin()?;
        Ok(self.orders.cancel_order(order_id).await?)
    }

    // ========== 管理: 菜单项 ==========

    pub async fn save_item(&self, draft: MenuItemDraft) -> AppResult<(MenuItem, WriteMode)> {
        self.require_admin()?;
        Ok(self.catalog.save_item(draft).await?)
    }

    /// 删除菜单项；离线时同时移除购物车中的对应行
    pub async fn delete_item(&mut self, item_id: &str) -> AppResult<WriteMode> {
        self.require_admin()?;
        let mode = self.catalog.delete_item(item_id).await?;
        if mode == WriteMode::Offline {
            self.cart.remove_item(item_id);
        }
        Ok(mode)
    }

    pub async fn toggle_item_flag(
        &self,
        item_id: &str,
        flag: MenuItemFlag,
    ) -> AppResult<(MenuItem, WriteMode)> {
        self.require_admin()?;
        Ok(self.catalog.toggle_flag(item_id, flag).await?)
    }

    // ========== 管理: 分类与设置 ==========

    pub async fn add_category(&self, name: &str) -> AppResult<(CategoryConfig, WriteMode)> {
        self.require_admin()?;
        Ok(self.catalog.add_category(name).await?)
    }

    pub async fn update_category(&self, config: CategoryConfig) -> AppResult<WriteMode> {
        self.require_admin()?;
        Ok(self.catalog.update_category(config).await?)
    }

    /// 删除分类；离线时同时移除该分类的购物车行
    pub async fn delete_category(&mut self, name: &str) -> AppResult<WriteMode> {
        self.require_admin()?;
        let mode = self.catalog.delete_category(name).await?;
        if mode == WriteMode::Offline {
            self.cart.remove_category(name);
        }
        Ok(mode)
    }

    pub async fn save_appearance(&self, patch: AppearancePatch) -> AppResult<WriteMode> {
        self.require_admin()?;
        Ok(self.catalog.save_appearance(patch).await?)
    }

    pub async fn save_contact(&self, contact: ContactSettings) -> AppResult<WriteMode> {
        self.require_admin()?;
        Ok(self.catalog.save_contact(contact).await?)
    }
}

async fn refresh_translations(
    localizer: &Localizer,
    catalog: &CatalogService,
) -> Option<TranslationOutcome> {
    if localizer.is_default() {
        return None;
    }
    let outcome = localizer
        .refresh(&catalog.category_names(), &catalog.items())
        .await;
    tracing::debug!(outcome = ?outcome, "Translations refreshed");
    Some(outcome)
}
