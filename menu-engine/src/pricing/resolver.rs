//! Unit price resolution
//!
//! Total functions: a size or add-on id that is not in the item's catalog
//! entry contributes nothing, so stale selections price as the base price.

use rust_decimal::Decimal;
use shared::models::MenuItem;
use std::collections::BTreeSet;

/// Price of the selected size, else the item price
pub fn base_price(item: &MenuItem, size_id: Option<&str>) -> Decimal {
    size_id
        .and_then(|id| item.find_size(id))
        .map(|size| size.price)
        .unwrap_or(item.price)
}

/// Sum of the prices of the item's add-ons whose ids are selected
///
/// Duplicate ids in the selection are counted once.
pub fn addons_total<'a, I>(item: &MenuItem, addon_ids: I) -> Decimal
where
    I: IntoIterator<Item = &'a str>,
{
    let selected: BTreeSet<&str> = addon_ids.into_iter().collect();
    if selected.is_empty() {
        return Decimal::ZERO;
    }
    item.addons
        .iter()
        .filter(|addon| selected.contains(addon.id.as_str()))
        .map(|addon| addon.price)
        .sum()
}

/// Unit price = base price + selected add-ons, unrounded
pub fn resolve_unit_price<'a, I>(item: &MenuItem, size_id: Option<&str>, addon_ids: I) -> Decimal
where
    I: IntoIterator<Item = &'a str>,
{
    let base = base_price(item, size_id);
    let addons = addons_total(item, addon_ids);
    tracing::trace!(item_id = %item.id, size_id = ?size_id, %base, %addons, "Resolved unit price");
    base + addons
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AddOn, Size};

    fn noodles() -> MenuItem {
        MenuItem::new("m1", "Main Course", "Dragon Noodles", Decimal::from(150)).with_addons(vec![
            AddOn {
                id: "a1".into(),
                name: "Extra Egg".into(),
                price: Decimal::from(20),
            },
            AddOn {
                id: "a2".into(),
                name: "Chili Oil".into(),
                price: Decimal::from(10),
            },
        ])
    }

    fn sized() -> MenuItem {
        noodles().with_sizes(vec![
            Size {
                id: "h1".into(),
                name: "Half".into(),
                price: Decimal::from(90),
            },
            Size {
                id: "h2".into(),
                name: "Full".into(),
                price: Decimal::from(150),
            },
        ])
    }

    #[test]
    fn test_plain_item() {
        let item = noodles();
        assert_eq!(resolve_unit_price(&item, None, []), Decimal::from(150));
    }

    #[test]
    fn test_addons_are_additive() {
        let item = noodles();
        assert_eq!(resolve_unit_price(&item, None, ["a1"]), Decimal::from(170));
        assert_eq!(resolve_unit_price(&item, None, ["a2", "a1"]), Decimal::from(180));
    }

    #[test]
    fn test_duplicate_addon_ids_counted_once() {
        let item = noodles();
        assert_eq!(resolve_unit_price(&item, None, ["a1", "a1"]), Decimal::from(170));
    }

    #[test]
    fn test_size_supersedes_item_price() {
        let item = sized();
        assert_eq!(resolve_unit_price(&item, Some("h1"), []), Decimal::from(90));
        assert_eq!(resolve_unit_price(&item, Some("h1"), ["a2"]), Decimal::from(100));
    }

    #[test]
    fn test_stale_references_fall_back() {
        let item = sized();
        // Unknown size prices as the item price, unknown add-on adds zero
        assert_eq!(resolve_unit_price(&item, Some("gone"), ["zz"]), Decimal::from(150));
        // Size id on an item without sizes is ignored
        assert_eq!(base_price(&noodles(), Some("h1")), Decimal::from(150));
    }

    #[test]
    fn test_non_decreasing_in_valid_addons() {
        let item = noodles();
        let none = resolve_unit_price(&item, None, []);
        let one = resolve_unit_price(&item, None, ["a2"]);
        let two = resolve_unit_price(&item, None, ["a2", "a1"]);
        assert!(none <= one && one <= two);
    }
}
