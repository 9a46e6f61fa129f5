//! Localizer - current language and its translation table
//!
//! ```text
//! set_language(lang)
//!     ├─ lang == default  → drop table, Default
//!     ├─ generation += 1, request sent (no lock held)
//!     ├─ generation moved on meanwhile → response dropped, Stale
//!     ├─ Ok(response)     → table replaced, Translated
//!     └─ Err(e)           → table dropped, Reverted(e)
//! ```

use super::error::TranslationError;
use super::table::TranslationTable;
use super::translator::Translator;
use super::types::TranslationRequest;
use parking_lot::RwLock;
use shared::models::MenuItem;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Default language selected; original text everywhere
    Default,
    Translated,
    /// Request failed; original text everywhere
    Reverted(TranslationError),
    /// A newer language request superseded this one
    Stale,
}

#[derive(Debug, Default)]
struct LocalizerState {
    language: String,
    generation: u64,
    table: Option<TranslationTable>,
}

pub struct Localizer {
    translator: Arc<dyn Translator>,
    default_language: String,
    state: RwLock<LocalizerState>,
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Localizer")
            .field("default_language", &self.default_language)
            .field("language", &state.language)
            .field("translated", &state.table.is_some())
            .finish()
    }
}

impl Localizer {
    pub fn new(translator: Arc<dyn Translator>, default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            translator,
            state: RwLock::new(LocalizerState {
                language: default_language.clone(),
                ..Default::default()
            }),
            default_language,
        }
    }

    pub fn language(&self) -> String {
        self.state.read().language.clone()
    }

    pub fn is_default(&self) -> bool {
        self.state.read().language == self.default_language
    }

    /// Switch language and fetch translations for the given menu
    pub async fn set_language(
        &self,
        language: &str,
        categories: &[String],
        items: &[MenuItem],
    ) -> TranslationOutcome {
        let generation = {
            let mut state = self.state.write();
            state.generation += 1;
            state.language = language.to_string();
            if language == self.default_language {
                state.table = None;
                tracing::debug!(language, "Default language selected");
                return TranslationOutcome::Default;
            }
            state.generation
        };

        let request = TranslationRequest::new(language, categories, items);
        let result = self.translator.translate(&request).await;

        let mut state = self.state.write();
        if state.generation != generation {
            tracing::warn!(language, "Ignoring stale translation response");
            return TranslationOutcome::Stale;
        }
        match result {
            Ok(response) => {
                let table = TranslationTable::from_response(language, response);
                tracing::info!(language, empty = table.is_empty(), "Translations loaded");
                state.table = Some(table);
                TranslationOutcome::Translated
            }
            Err(e) => {
                tracing::warn!(language, error = %e, "Translation failed, showing original text");
                state.table = None;
                TranslationOutcome::Reverted(e)
            }
        }
    }

    /// Re-translate the current language after the menu changed
    pub async fn refresh(&self, categories: &[String], items: &[MenuItem]) -> TranslationOutcome {
        let language = self.language();
        self.set_language(&language, categories, items).await
    }

    /// Translate a UI label or free text
    pub fn t(&self, text: &str) -> String {
        match &self.state.read().table {
            Some(table) => table.ui(text).to_string(),
            None => text.to_string(),
        }
    }

    pub fn category(&self, name: &str) -> String {
        match &self.state.read().table {
            Some(table) => table.category(name).to_string(),
            None => name.to_string(),
        }
    }

    pub fn localize_items(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        match &self.state.read().table {
            Some(table) => table.localize_items(items),
            None => items.to_vec(),
        }
    }
}
