use super::*;
use rand::Rng;
use rand::seq::SliceRandom;
use shared::models::{AddOn, Size};

fn addon(id: &str, name: &str, price: i64) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
    }
}

fn dragon_noodles() -> MenuItem {
    MenuItem::new("m1", "Main Course", "Dragon Noodles", Decimal::from(150)).with_addons(vec![
        addon("egg", "Extra Egg", 20),
        addon("chili", "Chili Oil", 10),
    ])
}

fn spring_rolls() -> MenuItem {
    MenuItem::new("m2", "Starter", "Spring Rolls", Decimal::from(120))
}

fn momos() -> MenuItem {
    MenuItem::new("m3", "Starter", "Momos", Decimal::from(100)).with_sizes(vec![
        Size {
            id: "h1".to_string(),
            name: "Half".to_string(),
            price: Decimal::from(60),
        },
        Size {
            id: "h2".to_string(),
            name: "Full".to_string(),
            price: Decimal::from(100),
        },
    ])
}

const NONE: [&str; 0] = [];

// ========== Add / merge ==========

#[test]
fn test_plain_item_added_n_times_is_one_line() {
    let mut cart = Cart::new();
    let item = spring_rolls();
    for _ in 0..5 {
        cart.add_selection(&item, None, NONE).unwrap();
    }
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity(), 5);
    assert_eq!(cart.item_count(), 5);
    assert_eq!(cart.subtotal(), Decimal::from(600));
}

#[test]
fn test_first_add_inserts_second_merges() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    let first = cart.add_selection(&item, None, ["egg"]).unwrap();
    let AddOutcome::Inserted { line_id } = first else {
        panic!("expected insert, got {first:?}");
    };
    let second = cart.add_selection(&item, None, ["egg"]).unwrap();
    assert_eq!(
        second,
        AddOutcome::Merged {
            line_id,
            quantity: 2
        }
    );
}

#[test]
fn test_addon_order_does_not_split_lines() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg", "chili"]).unwrap();
    cart.add_selection(&item, None, ["chili", "egg"]).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity(), 2);
}

#[test]
fn test_changing_one_component_splits_lines() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["chili"]).unwrap();
    assert_eq!(cart.len(), 2);

    let mut cart = Cart::new();
    let item = momos();
    cart.add_selection(&item, Some("h1"), NONE).unwrap();
    cart.add_selection(&item, Some("h2"), NONE).unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.subtotal(), Decimal::from(160));
}

#[test]
fn test_customization_gate() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    let outcome = cart.add_selection(&item, None, NONE).unwrap();
    assert_eq!(outcome, AddOutcome::CustomizationRequired);
    assert!(cart.is_empty());

    // A size alone satisfies the gate
    let outcome = cart.add_selection(&momos(), Some("h1"), NONE).unwrap();
    assert!(matches!(outcome, AddOutcome::Inserted { .. }));
}

#[test]
fn test_customized_add_bypasses_gate() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    let outcome = cart.add_customized(&item, None, NONE).unwrap();
    assert!(matches!(outcome, AddOutcome::Inserted { .. }));
    assert_eq!(cart.lines()[0].key(), &LineKey::plain("m1"));
    assert_eq!(cart.subtotal(), Decimal::from(150));
}

#[test]
fn test_sold_out_item_rejected() {
    let mut cart = Cart::new();
    let mut item = spring_rolls();
    item.is_available = false;
    let err = cart.add_selection(&item, None, NONE).unwrap_err();
    assert_eq!(err, CartError::SoldOut("m2".to_string()));
    assert!(cart.add_customized(&item, None, NONE).is_err());
    assert!(cart.is_empty());
}

#[test]
fn test_line_keeps_snapshot_of_item() {
    let mut cart = Cart::new();
    let mut item = spring_rolls();
    cart.add_selection(&item, None, NONE).unwrap();
    item.price = Decimal::from(999);
    cart.add_selection(&item, None, NONE).unwrap();
    // Merged into the first line, priced from its snapshot
    assert_eq!(cart.lines()[0].unit_price(), Decimal::from(120));
}

// ========== Dragon Noodles example ==========

#[test]
fn test_dragon_noodles_subtotal() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["egg", "chili"]).unwrap();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.lines()[0].line_total(), Decimal::from(340));
    assert_eq!(cart.lines()[1].line_total(), Decimal::from(180));
    assert_eq!(cart.subtotal(), Decimal::from(520));
    assert_eq!(cart.total(), cart.subtotal());
    assert_eq!(cart.item_count(), 3);
}

// ========== Toggle ==========

#[test]
fn test_toggle_rekeys_line() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    let key = LineKey::new("m1", None, ["egg"]);

    let outcome = cart.toggle_addon(&key, "chili").unwrap();
    let new_key = LineKey::new("m1", None, ["egg", "chili"]);
    assert!(matches!(outcome, ToggleOutcome::Rekeyed { ref key, .. } if *key == new_key));
    assert!(cart.find(&key).is_none());
    assert_eq!(cart.find(&new_key).unwrap().unit_price(), Decimal::from(180));
}

#[test]
fn test_toggle_collision_merges_quantities() {
    let mut cart = Cart::new();
    let item = dragon_noodles();
    cart.add_selection(&item, None, ["egg", "chili"]).unwrap();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    cart.add_selection(&item, None, ["egg"]).unwrap();
    let target_id = cart.lines()[0].id();

    let outcome = cart
        .toggle_addon(&LineKey::new("m1", None, ["egg"]), "chili")
        .unwrap();
    assert_eq!(
        outcome,
        ToggleOutcome::Merged {
            line_id: target_id,
            quantity: 3
        }
    );
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Decimal::from(540));
}

#[test]
fn test_toggle_missing_line() {
    let mut cart = Cart::new();
    let err = cart
        .toggle_addon(&LineKey::plain("nope"), "egg")
        .unwrap_err();
    assert!(matches!(err, CartError::LineNotFound(_)));
}

// ========== Quantity / removal ==========

#[test]
fn test_update_quantity_to_zero_removes() {
    let mut cart = Cart::new();
    cart.add_selection(&spring_rolls(), None, NONE).unwrap();
    let key = LineKey::plain("m2");

    assert_eq!(cart.update_quantity(&key, 2).unwrap(), QuantityChange::Updated(3));
    assert_eq!(cart.update_quantity(&key, -3).unwrap(), QuantityChange::Removed);
    assert!(cart.is_empty());
    assert!(cart.update_quantity(&key, 1).is_err());
}

#[test]
fn test_update_quantity_below_zero_removes() {
    let mut cart = Cart::new();
    cart.add_selection(&spring_rolls(), None, NONE).unwrap();
    let change = cart.update_quantity(&LineKey::plain("m2"), -10).unwrap();
    assert_eq!(change, QuantityChange::Removed);
}

#[test]
fn test_remove_line_is_noop_when_absent() {
    let mut cart = Cart::new();
    cart.add_selection(&spring_rolls(), None, NONE).unwrap();
    assert!(cart.remove_line(&LineKey::plain("other")).is_none());
    assert_eq!(cart.len(), 1);
    assert!(cart.remove_line(&LineKey::plain("m2")).is_some());
    assert!(cart.is_empty());
}

#[test]
fn test_remove_item_and_category() {
    let mut cart = Cart::new();
    cart.add_selection(&spring_rolls(), None, NONE).unwrap();
    cart.add_selection(&momos(), Some("h1"), NONE).unwrap();
    cart.add_selection(&dragon_noodles(), None, ["egg"]).unwrap();

    assert_eq!(cart.remove_item("m1"), 1);
    assert_eq!(cart.remove_category("Starter"), 2);
    assert!(cart.is_empty());
}

#[test]
fn test_insertion_order_preserved() {
    let mut cart = Cart::new();
    cart.add_selection(&momos(), Some("h2"), NONE).unwrap();
    cart.add_selection(&spring_rolls(), None, NONE).unwrap();
    cart.add_selection(&momos(), Some("h2"), NONE).unwrap();
    let ids: Vec<&str> = cart.lines().iter().map(|l| l.key().item_id()).collect();
    assert_eq!(ids, vec!["m3", "m2"]);
}

// ========== Randomized checks ==========

#[test]
fn test_random_selections_merge_by_identity() {
    let mut rng = rand::thread_rng();
    let item = dragon_noodles();
    let pool = ["egg", "chili"];

    for _ in 0..50 {
        let mut cart = Cart::new();
        let mut adds = 0u32;
        for _ in 0..rng.gen_range(1..30) {
            let mut picked: Vec<&str> = pool
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            if picked.is_empty() {
                picked.push("egg");
            }
            picked.shuffle(&mut rng);
            // Duplicates in the selection never create a new identity
            if rng.gen_bool(0.3) {
                let first = picked[0];
                picked.push(first);
            }
            cart.add_selection(&item, None, picked).unwrap();
            adds += 1;
        }

        // {egg}, {chili}, {egg, chili}
        assert!(cart.len() <= 3);
        assert_eq!(cart.item_count(), adds);
        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.unit_price() * Decimal::from(l.quantity()))
            .sum();
        assert_eq!(cart.subtotal(), expected);
    }
}

#[test]
fn test_random_quantity_walk_never_non_positive() {
    let mut rng = rand::thread_rng();
    let item = spring_rolls();
    let key = LineKey::plain("m2");

    for _ in 0..50 {
        let mut cart = Cart::new();
        cart.add_selection(&item, None, NONE).unwrap();
        let mut expected: i64 = 1;
        for _ in 0..20 {
            let delta = rng.gen_range(-3..=3);
            match cart.update_quantity(&key, delta) {
                Ok(QuantityChange::Updated(q)) => {
                    expected += i64::from(delta);
                    assert_eq!(i64::from(q), expected);
                    assert!(q > 0);
                }
                Ok(QuantityChange::Removed) => {
                    assert!(expected + i64::from(delta) <= 0);
                    break;
                }
                Err(_) => unreachable!("line exists until removed"),
            }
        }
        assert!(cart.lines().iter().all(|l| l.quantity() > 0));
    }
}
