//! Translation: batch requests, lookup tables and the active language

mod error;
mod localizer;
mod table;
mod translator;
pub mod types;

pub use error::TranslationError;
pub use localizer::{Localizer, TranslationOutcome};
pub use table::TranslationTable;
pub use translator::{NoopTranslator, Translator};
pub use types::{TranslationRequest, TranslationResponse};

/// Fixed UI labels sent with every translation request
pub const UI_LABELS: &[&str] = &[
    "Veg Only",
    "Non-Veg Only",
    "Your Order",
    "Table",
    "Total",
    "Subtotal",
    "Place Order",
    "Customize",
    "Ingredients",
    "Allergens",
    "Nutrition",
    "Calories",
    "Protein",
    "Carbs",
    "Fat",
    "Search dishes...",
    "Found",
    "results for",
    "Experience the Art of Asian Cuisine",
    "Asian Cuisine",
    "Asian Fusion",
    "Walk-in",
    "Info",
    "Ingredients not listed.",
    "Nutritional info not available.",
    "None listed.",
    "Contains",
    "View in AR",
    "No AR",
    "Confirm Order?",
    "Are you sure?",
    "Order placed successfully!",
    "Live Orders",
    "Live",
    "Completed",
    "Cancelled",
];
