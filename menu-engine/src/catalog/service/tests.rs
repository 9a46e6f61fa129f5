use super::*;
use crate::store::{CATEGORIES, MENU_ITEMS, MemoryStore};
use rust_decimal::Decimal;
use shared::models::SizeScheme;

fn draft(name: &str, category: &str) -> MenuItemDraft {
    MenuItemDraft {
        id: None,
        category: category.into(),
        name: name.into(),
        description: format!("{name} from the wok"),
        image: "https://example.com/dish.jpg".into(),
        price: Decimal::from(150),
        ar_model_url: None,
        is_spicy: false,
        is_veg: false,
        is_available: None,
        is_best_seller: None,
        is_chefs_fav: None,
        addons: vec![],
        size_scheme: SizeScheme::None,
        nutrition: None,
        ingredients: vec![],
        allergens: vec![],
    }
}

fn create_test_service(offline_fallback: bool) -> (Arc<MemoryStore>, CatalogService) {
    let store = Arc::new(MemoryStore::new());
    let service = CatalogService::new(store.clone(), offline_fallback);
    (store, service)
}

fn sync(store: &MemoryStore, service: &CatalogService) {
    service.apply_items(store.subscribe_menu_items().latest());
    service.apply_categories(store.subscribe_categories().latest());
}

// ========== Items ==========

#[tokio::test]
async fn test_save_item_remote() {
    let (store, service) = create_test_service(true);
    let (saved, mode) = service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    assert_eq!(mode, WriteMode::Remote);
    assert!(!saved.id.is_empty());
    assert_eq!(store.document_count(MENU_ITEMS), 1);

    // Cache only changes through the snapshot
    assert!(service.items().is_empty());
    sync(&store, &service);
    assert_eq!(service.item(&saved.id).unwrap().name, "Dragon Noodles");
}

#[tokio::test]
async fn test_invalid_draft_writes_nothing() {
    let (store, service) = create_test_service(true);
    let mut d = draft("Dragon Noodles", "Main Course");
    d.image.clear();
    let err = service.save_item(d).await.unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
    assert_eq!(store.document_count(MENU_ITEMS), 0);
}

#[tokio::test]
async fn test_edit_unknown_item() {
    let (_store, service) = create_test_service(true);
    let mut d = draft("Dragon Noodles", "Main Course");
    d.id = Some("ghost".into());
    let err = service.save_item(d).await.unwrap_err();
    assert!(matches!(err, CatalogError::ItemNotFound(_)));
}

#[tokio::test]
async fn test_save_item_offline() {
    let (store, service) = create_test_service(true);
    store.set_available(false);
    let (saved, mode) = service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    assert_eq!(mode, WriteMode::Offline);
    assert!(saved.id.starts_with("local-"));
    assert_eq!(service.items().len(), 1);
    assert_eq!(store.document_count(MENU_ITEMS), 0);
}

#[tokio::test]
async fn test_save_item_failure_without_fallback() {
    let (store, service) = create_test_service(false);
    store.set_available(false);
    let err = service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap_err();
    assert!(matches!(err, CatalogError::Store(_)));
    assert!(service.items().is_empty());
}

#[tokio::test]
async fn test_toggle_flag() {
    let (store, service) = create_test_service(true);
    let (saved, _) = service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    sync(&store, &service);

    let (item, mode) = service.toggle_flag(&saved.id, MenuItemFlag::Available).await.unwrap();
    assert_eq!(mode, WriteMode::Remote);
    assert!(!item.is_available);
    assert_eq!(store.document(MENU_ITEMS, &saved.id).unwrap()["isAvailable"], false);

    store.set_available(false);
    let (item, mode) = service.toggle_flag(&saved.id, MenuItemFlag::ChefsFav).await.unwrap();
    assert_eq!(mode, WriteMode::Offline);
    assert!(item.is_chefs_fav);
    assert!(service.item(&saved.id).unwrap().is_chefs_fav);
}

#[tokio::test]
async fn test_delete_item() {
    let (store, service) = create_test_service(true);
    let (saved, _) = service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    sync(&store, &service);

    store.set_available(false);
    let mode = service.delete_item(&saved.id).await.unwrap();
    assert_eq!(mode, WriteMode::Offline);
    assert!(service.item(&saved.id).is_none());

    let err = service.delete_item(&saved.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::ItemNotFound(_)));
}

// ========== Categories ==========

#[tokio::test]
async fn test_add_category_orders_and_rejects_duplicates() {
    let (store, service) = create_test_service(true);
    let (first, _) = service.add_category("Starter").await.unwrap();
    assert_eq!(first.order, Some(1));
    sync(&store, &service);

    let (second, _) = service.add_category("  Main Course ").await.unwrap();
    assert_eq!(second.category, "Main Course");
    assert_eq!(second.order, Some(2));
    assert_eq!(second.overlay_opacity, 0.6);
    sync(&store, &service);

    assert_eq!(service.category_names(), vec!["Starter", "Main Course"]);
    let err = service.add_category("Starter").await.unwrap_err();
    assert!(matches!(err, CatalogError::CategoryExists(_)));
    assert_eq!(store.document_count(CATEGORIES), 2);
}

#[tokio::test]
async fn test_blank_category_name() {
    let (_store, service) = create_test_service(true);
    assert!(matches!(
        service.add_category("   ").await.unwrap_err(),
        CatalogError::Invalid(_)
    ));
}

#[tokio::test]
async fn test_update_category_clamps_opacity() {
    let (store, service) = create_test_service(true);
    service.add_category("Starter").await.unwrap();
    sync(&store, &service);

    let mut cfg = service.category("Starter").unwrap();
    cfg.overlay_opacity = 2.0;
    cfg.order = None;
    service.update_category(cfg).await.unwrap();
    sync(&store, &service);

    let cfg = service.category("Starter").unwrap();
    assert_eq!(cfg.overlay_opacity, 0.9);
    assert_eq!(cfg.order, Some(1));
}

#[tokio::test]
async fn test_offline_category_delete_drops_items() {
    let (store, service) = create_test_service(true);
    service.add_category("Starter").await.unwrap();
    service.add_category("Main Course").await.unwrap();
    service.save_item(draft("Spring Rolls", "Starter")).await.unwrap();
    service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    sync(&store, &service);

    store.set_available(false);
    let mode = service.delete_category("Starter").await.unwrap();
    assert_eq!(mode, WriteMode::Offline);
    assert_eq!(service.category_names(), vec!["Main Course"]);
    let names: Vec<String> = service.items().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Dragon Noodles"]);
}

#[tokio::test]
async fn test_remote_category_delete_keeps_items() {
    let (store, service) = create_test_service(true);
    service.add_category("Starter").await.unwrap();
    service.save_item(draft("Spring Rolls", "Starter")).await.unwrap();
    sync(&store, &service);

    service.delete_category("Starter").await.unwrap();
    sync(&store, &service);
    assert!(service.category_names().is_empty());
    assert_eq!(service.items().len(), 1);

    let err = service.delete_category("Starter").await.unwrap_err();
    assert!(matches!(err, CatalogError::CategoryNotFound(_)));
}

// ========== Settings ==========

#[tokio::test]
async fn test_appearance_overlay() {
    let (store, service) = create_test_service(true);
    let patch = AppearancePatch {
        hero_title: Some("Wok & Roll".into()),
        ..Default::default()
    };
    service.save_appearance(patch).await.unwrap();
    assert_eq!(service.settings().hero_title, "Wok & Roll");
    // Untouched fields keep their defaults
    assert_eq!(service.settings().primary_font, "Roboto");

    // A fresh service picks the document up from the snapshot
    let other = CatalogService::new(store.clone(), true);
    other.apply_appearance(store.subscribe_appearance().latest());
    assert_eq!(other.settings().hero_title, "Wok & Roll");
}

#[tokio::test]
async fn test_contact_rejected_keeps_settings() {
    let (store, service) = create_test_service(true);
    store.set_read_only(true);
    let contact = ContactSettings {
        support_email: "help@example.com".into(),
        ..Default::default()
    };
    assert!(service.save_contact(contact).await.is_err());
    assert!(service.settings().contact.support_email.is_empty());

    store.set_read_only(false);
    store.set_available(false);
    let contact = ContactSettings {
        support_email: "help@example.com".into(),
        ..Default::default()
    };
    assert_eq!(service.save_contact(contact).await.unwrap(), WriteMode::Offline);
    assert_eq!(service.settings().contact.support_email, "help@example.com");
}

#[test]
fn test_filter_uses_cache() {
    let (_store, service) = create_test_service(true);
    let mut veg = MenuItem::new("v1", "Starter", "Spring Rolls", Decimal::from(90));
    veg.is_veg = true;
    let wings = MenuItem::new("c1", "Starter", "Chicken Wings", Decimal::from(180));
    service.apply_items(vec![veg, wings]);

    let filter = MenuFilter::customer("Starter").with_diet(crate::catalog::DietFilter::VegOnly);
    let names: Vec<String> = service.filter(&filter).into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Spring Rolls"]);
}

#[tokio::test]
async fn test_revision_follows_menu_changes() {
    let (store, service) = create_test_service(true);
    let mut changes = service.changes();
    assert_eq!(changes.latest(), 0);

    service.save_item(draft("Dragon Noodles", "Main Course")).await.unwrap();
    // Remote writes only count once the snapshot lands
    assert_eq!(service.revision(), 0);
    sync(&store, &service);
    assert_eq!(changes.next().await, Some(2));

    store.set_available(false);
    service.add_category("Dessert").await.unwrap();
    assert_eq!(service.revision(), 3);

    // Settings are not part of the translated menu
    service.apply_appearance(Some(AppearancePatch::default()));
    assert_eq!(service.revision(), 3);
}
