//! Lookup table built from a translation response

use super::types::{ItemTranslation, TextPair, TranslationResponse};
use shared::models::MenuItem;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    language: String,
    ui: HashMap<String, String>,
    categories: HashMap<String, String>,
    items: HashMap<String, ItemTranslation>,
}

fn pairs(entries: Vec<TextPair>) -> HashMap<String, String> {
    entries
        .into_iter()
        .filter(|p| !p.translated.trim().is_empty())
        .map(|p| (p.original, p.translated))
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl TranslationTable {
    pub fn from_response(language: impl Into<String>, response: TranslationResponse) -> Self {
        Self {
            language: language.into(),
            ui: pairs(response.ui),
            categories: pairs(response.categories),
            items: response
                .items
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_empty(&self) -> bool {
        self.ui.is_empty() && self.categories.is_empty() && self.items.is_empty()
    }

    /// UI label (or any free text such as the hero title), original if untranslated
    pub fn ui<'a>(&'a self, text: &'a str) -> &'a str {
        self.ui.get(text).map_or(text, String::as_str)
    }

    pub fn category<'a>(&'a self, name: &'a str) -> &'a str {
        self.categories.get(name).map_or(name, String::as_str)
    }

    /// Copy of `item` with translated text; each field falls back on its own
    pub fn localize_item(&self, item: &MenuItem) -> MenuItem {
        let mut out = item.clone();
        let Some(t) = self.items.get(&item.id) else {
            return out;
        };

        if let Some(name) = non_empty(&t.name) {
            out.name = name.to_string();
        }
        if let Some(description) = non_empty(&t.description) {
            out.description = description.to_string();
        }
        if let Some(ingredients) = t.ingredients.as_ref().filter(|v| !v.is_empty()) {
            out.ingredients = ingredients.clone();
        }
        if let Some(allergens) = t.allergens.as_ref().filter(|v| !v.is_empty()) {
            out.allergens = allergens.clone();
        }
        for addon in &mut out.addons {
            if let Some(name) = t
                .addons
                .iter()
                .find(|a| a.id == addon.id && !a.name.trim().is_empty())
            {
                addon.name = name.name.clone();
            }
        }
        out
    }

    pub fn localize_items(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items.iter().map(|i| self.localize_item(i)).collect()
    }
}
