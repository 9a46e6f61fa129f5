//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Size option (id unique within the owning item)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// Add-on option (id unique within the owning item)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// Nutrition panel shown on the dish details page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Menu item entity
///
/// Stored one document per item in the `menu_item` collection, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Document id (empty until the store assigns one)
    #[serde(default)]
    pub id: String,
    /// Category name (not enforced against the category list)
    pub category: String,
    pub name: String,
    /// Base price; superseded by a size price when sizes exist
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar_model_url: Option<String>,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub is_veg: bool,
    /// Sold-out items have this set to false
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_chefs_fav: bool,
    #[serde(default)]
    pub addons: Vec<AddOn>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Minimal item with no options, available, and no flags set
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            ar_model_url: None,
            is_spicy: false,
            is_veg: false,
            is_available: true,
            is_best_seller: false,
            is_chefs_fav: false,
            addons: Vec::new(),
            sizes: Vec::new(),
            nutrition: None,
            ingredients: Vec::new(),
            allergens: Vec::new(),
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<Size>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_addons(mut self, addons: Vec<AddOn>) -> Self {
        self.addons = addons;
        self
    }

    /// Whether the item offers any size or add-on choice
    pub fn has_options(&self) -> bool {
        !self.sizes.is_empty() || !self.addons.is_empty()
    }

    pub fn find_size(&self, size_id: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.id == size_id)
    }

    pub fn find_addon(&self, addon_id: &str) -> Option<&AddOn> {
        self.addons.iter().find(|a| a.id == addon_id)
    }

    /// Flip one of the independent boolean flags
    pub fn toggle_flag(&mut self, flag: MenuItemFlag) {
        match flag {
            MenuItemFlag::Available => self.is_available = !self.is_available,
            MenuItemFlag::BestSeller => self.is_best_seller = !self.is_best_seller,
            MenuItemFlag::ChefsFav => self.is_chefs_fav = !self.is_chefs_fav,
        }
    }
}

/// Admin-toggleable item flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuItemFlag {
    Available,
    BestSeller,
    ChefsFav,
}

/// Size scheme chosen in the item editor
///
/// Each scheme expands into a fixed set of sizes; the item's base price is
/// taken from the representative size (Medium, or Full).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SizeScheme {
    None,
    SmallMediumLarge {
        small: Decimal,
        medium: Decimal,
        large: Decimal,
    },
    HalfFull {
        half: Decimal,
        full: Decimal,
    },
}

impl SizeScheme {
    /// Expand into sizes, reusing ids of `existing` sizes that share a name
    pub fn build_sizes(&self, existing: &[Size]) -> Vec<Size> {
        let slots: Vec<(&str, &str, Decimal)> = match self {
            SizeScheme::None => Vec::new(),
            SizeScheme::SmallMediumLarge {
                small,
                medium,
                large,
            } => vec![
                ("s1", "Small", *small),
                ("s2", "Medium", *medium),
                ("s3", "Large", *large),
            ],
            SizeScheme::HalfFull { half, full } => {
                vec![("h1", "Half", *half), ("h2", "Full", *full)]
            }
        };

        slots
            .into_iter()
            .map(|(default_id, name, price)| {
                let id = existing
                    .iter()
                    .find(|s| s.name == name)
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| default_id.to_string());
                Size {
                    id,
                    name: name.to_string(),
                    price,
                }
            })
            .collect()
    }

    /// Price stored as the item's base price for this scheme
    pub fn representative_price(&self) -> Option<Decimal> {
        match self {
            SizeScheme::None => None,
            SizeScheme::SmallMediumLarge { medium, .. } => Some(*medium),
            SizeScheme::HalfFull { full, .. } => Some(*full),
        }
    }

    /// Infer the scheme from an item's stored sizes
    pub fn detect(sizes: &[Size]) -> Self {
        let price_of = |name: &str| sizes.iter().find(|s| s.name == name).map(|s| s.price);
        if let (Some(half), Some(full)) = (price_of("Half"), price_of("Full")) {
            return SizeScheme::HalfFull { half, full };
        }
        match (price_of("Small"), price_of("Medium"), price_of("Large")) {
            (Some(small), Some(medium), Some(large)) => SizeScheme::SmallMediumLarge {
                small,
                medium,
                large,
            },
            _ => SizeScheme::None,
        }
    }
}

/// Add-on row as entered in the item editor (name may be blank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: Decimal,
}

/// Create/update menu item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    /// Existing item id when editing
    #[serde(default)]
    pub id: Option<String>,
    pub category: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Base price used when `size_scheme` is `None`
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ar_model_url: Option<String>,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub is_veg: bool,
    pub is_available: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_chefs_fav: Option<bool>,
    #[serde(default)]
    pub addons: Vec<AddOnDraft>,
    pub size_scheme: SizeScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}
