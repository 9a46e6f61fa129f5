//! Translation request/response payloads
//!
//! Responses are parallel arrays keyed by original text (labels,
//! categories) or by item id. Every field is optional on the way back;
//! whatever is missing falls back to the original text.

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub original: String,
    pub translated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonText {
    pub id: String,
    pub name: String,
}

/// Translatable fields of one menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemText {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub addons: Vec<AddonText>,
}

impl From<&MenuItem> for ItemText {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            ingredients: item.ingredients.clone(),
            allergens: item.allergens.clone(),
            addons: item
                .addons
                .iter()
                .map(|a| AddonText {
                    id: a.id.clone(),
                    name: a.name.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub language: String,
    pub ui: Vec<String>,
    pub categories: Vec<String>,
    pub items: Vec<ItemText>,
}

impl TranslationRequest {
    pub fn new(language: impl Into<String>, categories: &[String], items: &[MenuItem]) -> Self {
        Self {
            language: language.into(),
            ui: super::UI_LABELS.iter().map(|s| s.to_string()).collect(),
            categories: categories.to_vec(),
            items: items.iter().map(ItemText::from).collect(),
        }
    }
}

/// Translated fields of one item; `None`/empty means "keep the original"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTranslation {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
    #[serde(default)]
    pub addons: Vec<AddonText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub ui: Vec<TextPair>,
    #[serde(default)]
    pub categories: Vec<TextPair>,
    #[serde(default)]
    pub items: Vec<ItemTranslation>,
}

impl TranslationResponse {
    /// Parse a raw service payload
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
