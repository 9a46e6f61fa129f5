//! Admin form drafts → validated menu items

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use shared::error::AppError;
use shared::models::{AddOn, AddOnDraft, MenuItem, MenuItemDraft, SizeScheme};

/// Validate a draft and build the item to persist
///
/// `existing` is the item being edited, if any; its size ids are reused
/// by size name and its flags are kept unless the draft sets them.
pub fn build_menu_item(draft: MenuItemDraft, existing: Option<&MenuItem>) -> Result<MenuItem, AppError> {
    validate_required_text(&draft.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&draft.description, "description", MAX_NOTE_LEN)?;
    validate_required_text(&draft.image, "image", MAX_URL_LEN)?;
    validate_required_text(&draft.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&draft.ar_model_url, "arModelUrl", MAX_URL_LEN)?;
    validate_price(draft.price, "price")?;
    validate_scheme(&draft.size_scheme)?;

    let mut addons = Vec::with_capacity(draft.addons.len());
    for addon in draft.addons {
        let name = addon.name.trim();
        if name.is_empty() {
            continue;
        }
        validate_required_text(name, "addon name", MAX_NAME_LEN)?;
        validate_price(addon.price, "addon price")?;
        addons.push(AddOn {
            id: addon
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(new_addon_id),
            name: name.to_string(),
            price: addon.price,
        });
    }

    let existing_sizes = existing.map(|e| e.sizes.as_slice()).unwrap_or_default();
    let sizes = draft.size_scheme.build_sizes(existing_sizes);
    let price = draft.size_scheme.representative_price().unwrap_or(draft.price);

    Ok(MenuItem {
        id: draft
            .id
            .or_else(|| existing.map(|e| e.id.clone()))
            .unwrap_or_default(),
        category: draft.category.trim().to_string(),
        name: draft.name.trim().to_string(),
        price,
        description: draft.description.trim().to_string(),
        image: draft.image.trim().to_string(),
        ar_model_url: draft.ar_model_url.filter(|u| !u.trim().is_empty()),
        is_spicy: draft.is_spicy,
        is_veg: draft.is_veg,
        is_available: resolve_flag(draft.is_available, existing.map(|e| e.is_available), true),
        is_best_seller: resolve_flag(draft.is_best_seller, existing.map(|e| e.is_best_seller), false),
        is_chefs_fav: resolve_flag(draft.is_chefs_fav, existing.map(|e| e.is_chefs_fav), false),
        addons,
        sizes,
        nutrition: draft.nutrition,
        ingredients: clean_list(draft.ingredients),
        allergens: clean_list(draft.allergens),
    })
}

/// Turn an item back into a draft for editing
pub fn draft_from_item(item: &MenuItem) -> MenuItemDraft {
    MenuItemDraft {
        id: Some(item.id.clone()),
        category: item.category.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        image: item.image.clone(),
        price: item.price,
        ar_model_url: item.ar_model_url.clone(),
        is_spicy: item.is_spicy,
        is_veg: item.is_veg,
        is_available: Some(item.is_available),
        is_best_seller: Some(item.is_best_seller),
        is_chefs_fav: Some(item.is_chefs_fav),
        addons: item
            .addons
            .iter()
            .map(|a| AddOnDraft {
                id: Some(a.id.clone()),
                name: a.name.clone(),
                price: a.price,
            })
            .collect(),
        size_scheme: SizeScheme::detect(&item.sizes),
        nutrition: item.nutrition.clone(),
        ingredients: item.ingredients.clone(),
        allergens: item.allergens.clone(),
    }
}

fn validate_scheme(scheme: &SizeScheme) -> Result<(), AppError> {
    match scheme {
        SizeScheme::None => Ok(()),
        SizeScheme::SmallMediumLarge {
            small,
            medium,
            large,
        } => {
            validate_price(*small, "small price")?;
            validate_price(*medium, "medium price")?;
            validate_price(*large, "large price")
        }
        SizeScheme::HalfFull { half, full } => {
            validate_price(*half, "half price")?;
            validate_price(*full, "full price")
        }
    }
}

/// Draft value, else the edited item's, else the default for new items
fn resolve_flag(draft: Option<bool>, existing: Option<bool>, default: bool) -> bool {
    draft.or(existing).unwrap_or(default)
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn new_addon_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
