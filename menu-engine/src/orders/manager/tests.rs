use super::*;
use crate::store::{MemoryStore, ORDERS};
use rust_decimal::Decimal;
use shared::models::{AddOn, MenuItem};

fn dragon_noodles() -> MenuItem {
    MenuItem::new("m1", "Main Course", "Dragon Noodles", Decimal::from(150)).with_addons(vec![
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
    ])
}

fn filled_cart() -> Cart {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["egg", "chili"]).unwrap();
    cart
}

fn create_test_manager(offline_fallback: bool) -> (Arc<MemoryStore>, OrdersManager) {
    let store = Arc::new(MemoryStore::new());
    let manager = OrdersManager::new(store.clone(), offline_fallback, 16);
    (store, manager)
}

// ========== Placement ==========

#[tokio::test]
async fn test_place_order_persists_and_clears_cart() {
    let (store, manager) = create_test_manager(true);
    let mut events = manager.subscribe();
    let mut cart = filled_cart();

    let placement = manager.place_order(&mut cart, Some("T3")).await.unwrap();
    assert_eq!(placement.mode, WriteMode::Remote);
    assert!(!placement.order.id.is_empty());
    assert_eq!(placement.order.table_number, "T3");
    assert_eq!(placement.order.total_amount, Some(Decimal::from(520)));
    assert!(cart.is_empty());
    assert_eq!(store.document_count(ORDERS), 1);

    let event = events.recv().await.unwrap();
    assert_eq!(
        event,
        OrderEvent::Placed {
            order_id: placement.order.id.clone(),
            mode: WriteMode::Remote
        }
    );

    // The store snapshot is what fills the live list
    manager.apply_snapshot(store.subscribe_live_orders().latest());
    assert_eq!(manager.live_orders().len(), 1);
}

#[tokio::test]
async fn test_empty_cart_writes_nothing() {
    let (store, manager) = create_test_manager(true);
    let mut cart = Cart::new();
    let err = manager.place_order(&mut cart, Some("T1")).await.unwrap_err();
    assert!(matches!(err, OrderError::EmptyCart));
    assert_eq!(store.document_count(ORDERS), 0);
}

#[tokio::test]
async fn test_blank_table_is_walk_in() {
    let (_store, manager) = create_test_manager(true);
    let mut cart = filled_cart();
    let placement = manager.place_order(&mut cart, Some("")).await.unwrap();
    assert_eq!(placement.order.table_number, "Walk-in");
}

#[tokio::test]
async fn test_offline_placement_kept_locally() {
    let (store, manager) = create_test_manager(true);
    store.set_available(false);
    let mut cart = filled_cart();

    let placement = manager.place_order(&mut cart, None).await.unwrap();
    assert_eq!(placement.mode, WriteMode::Offline);
    assert!(placement.order.id.starts_with("local-"));
    assert!(cart.is_empty());
    assert_eq!(store.document_count(ORDERS), 0);

    let live = manager.live_orders();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, placement.order.id);
}

#[tokio::test]
async fn test_offline_placement_prepends() {
    let (store, manager) = create_test_manager(true);
    store.set_available(false);
    let mut cart = filled_cart();
    let first = manager.place_order(&mut cart, None).await.unwrap();
    let mut cart = filled_cart();
    let second = manager.place_order(&mut cart, None).await.unwrap();

    let ids: Vec<String> = manager.live_orders().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.order.id, first.order.id]);
}

#[tokio::test]
async fn test_unavailable_without_fallback_keeps_cart() {
    let (store, manager) = create_test_manager(false);
    store.set_available(false);
    let mut cart = filled_cart();

    let err = manager.place_order(&mut cart, Some("T1")).await.unwrap_err();
    assert!(matches!(err, OrderError::Store(_)));
    assert_eq!(cart.item_count(), 3);
    assert!(manager.live_orders().is_empty());
}

#[tokio::test]
async fn test_rejected_write_keeps_cart_even_with_fallback() {
    let (store, manager) = create_test_manager(true);
    store.set_read_only(true);
    let mut cart = filled_cart();

    assert!(manager.place_order(&mut cart, Some("T1")).await.is_err());
    assert_eq!(cart.len(), 2);
}

// ========== Status ==========

#[tokio::test]
async fn test_complete_order() {
    let (store, manager) = create_test_manager(true);
    let mut cart = filled_cart();
    let placed = manager.place_order(&mut cart, Some("T1")).await.unwrap();
    manager.apply_snapshot(store.subscribe_live_orders().latest());

    let mode = manager.complete_order(&placed.order.id).await.unwrap();
    assert_eq!(mode, WriteMode::Remote);
    assert!(manager.live_orders().is_empty());

    let doc = store.document(ORDERS, &placed.order.id).unwrap();
    assert_eq!(doc["status"], "Completed");
    assert!(store.subscribe_live_orders().latest().is_empty());
}

#[tokio::test]
async fn test_terminal_order_cannot_change_again() {
    let (store, manager) = create_test_manager(true);
    let mut cart = filled_cart();
    let placed = manager.place_order(&mut cart, Some("T1")).await.unwrap();
    manager.apply_snapshot(store.subscribe_live_orders().latest());

    manager.cancel_order(&placed.order.id).await.unwrap();
    let err = manager.complete_order(&placed.order.id).await.unwrap_err();
    assert!(matches!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Cancelled,
            to: OrderStatus::Completed,
            ..
        }
    ));

    let doc = store.document(ORDERS, &placed.order.id).unwrap();
    assert_eq!(doc["status"], "Cancelled");
}

#[tokio::test]
async fn test_unknown_order() {
    let (_store, manager) = create_test_manager(true);
    let err = manager.cancel_order("nope").await.unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound(_)));
}

#[tokio::test]
async fn test_offline_cancel_removes_locally() {
    let (store, manager) = create_test_manager(true);
    let mut cart = filled_cart();
    let placed = manager.place_order(&mut cart, Some("T1")).await.unwrap();
    manager.apply_snapshot(store.subscribe_live_orders().latest());

    store.set_available(false);
    let mode = manager.cancel_order(&placed.order.id).await.unwrap();
    assert_eq!(mode, WriteMode::Offline);
    assert!(manager.find(&placed.order.id).is_none());
}

#[tokio::test]
async fn test_failed_status_write_leaves_state() {
    let (store, manager) = create_test_manager(false);
    let mut cart = filled_cart();
    let placed = manager.place_order(&mut cart, Some("T1")).await.unwrap();
    manager.apply_snapshot(store.subscribe_live_orders().latest());

    store.set_available(false);
    assert!(manager.complete_order(&placed.order.id).await.is_err());
    assert_eq!(manager.find(&placed.order.id).unwrap().status, OrderStatus::Live);
}

// ========== Snapshots ==========

#[test]
fn test_snapshot_replaces_and_sorts() {
    let (_store, manager) = create_test_manager(true);
    let order = |id: &str, created_at: i64, status: OrderStatus| Order {
        id: id.into(),
        table_number: "T1".into(),
        items: vec![],
        status,
        created_at,
        total_amount: None,
    };

    manager.apply_snapshot(vec![order("a", 1, OrderStatus::Live)]);
    manager.apply_snapshot(vec![
        order("b", 5, OrderStatus::Live),
        order("c", 9, OrderStatus::Live),
        order("d", 7, OrderStatus::Completed),
    ]);
    let ids: Vec<String> = manager.live_orders().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["c", "b"]);
}

#[tokio::test]
async fn test_closed_history_is_bounded() {
    let (store, manager) = create_test_manager(true);
    store.set_available(false);

    let mut ids = Vec::new();
    for _ in 0..=CLOSED_HISTORY {
        let mut cart = filled_cart();
        let placed = manager.place_order(&mut cart, Some("T1")).await.unwrap();
        manager.cancel_order(&placed.order.id).await.unwrap();
        ids.push(placed.order.id);
    }
    assert_eq!(manager.closed.read().len(), CLOSED_HISTORY);

    // Oldest entry was dropped
    let err = manager.complete_order(&ids[0]).await.unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound(_)));

    let err = manager.complete_order(&ids[CLOSED_HISTORY]).await.unwrap_err();
    assert!(matches!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Cancelled,
            ..
        }
    ));
}
