use std::sync::Arc;

use anyhow::Context;
use menu_engine::store::DocumentStore;
use menu_engine::{MemoryStore, MenuApp, NoopTranslator, setup_environment};
use rust_decimal::Decimal;
use shared::models::{AddOn, CategoryConfig, MenuItem};

/// Seed an in-memory store with a one-dish menu
async fn demo_store() -> anyhow::Result<Arc<MemoryStore>> {
    let store = Arc::new(MemoryStore::new());
    store
        .put_category(CategoryConfig::new("Main Course", 1))
        .await
        .context("seed category")?;

    let mut noodles = MenuItem::new("m1", "Main Course", "Dragon Noodles", Decimal::from(150))
        .with_addons(vec![
            AddOn {
                id: "egg".into(),
                name: "Extra Egg".into(),
                price: Decimal::from(20),
            },
            AddOn {
                id: "chili".into(),
                name: "Chili Oil".into(),
                price: Decimal::from(10),
            },
        ]);
    noodles.description = "Hand pulled noodles tossed in a smoking wok".into();
    store.upsert_menu_item(noodles).await.context("seed menu")?;
    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment();
    tracing::info!("Menu engine starting...");

    // 2. 初始化应用根 (内存存储演示)
    let store = demo_store().await?;
    let mut app = MenuApp::new(config, store, Arc::new(NoopTranslator))?;
    app.start();
    app.sync_now();
    app.set_table_id(Some("T4".into()));

    // 3. 演示一次点餐
    app.add_to_cart("m1", None, &["egg"])?;
    app.add_to_cart("m1", None, &["egg"])?;
    app.add_to_cart("m1", None, &["chili", "egg"])?;
    tracing::info!(lines = app.cart().len(), total = %app.cart_total(), "Cart ready");

    let placement = app.place_order().await?;
    tracing::info!(
        order_id = %placement.order.id,
        mode = ?placement.mode,
        "Demo order placed"
    );

    // 4. 等待退出信号
    tokio::signal::ctrl_c().await.context("wait for ctrl-c")?;
    app.stop().await;
    tracing::info!("Menu engine stopped");
    Ok(())
}
