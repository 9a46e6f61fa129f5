//! Site appearance and contact settings (singleton documents)

use serde::{Deserialize, Serialize};

/// Effective site settings as rendered by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub hero_title: String,
    pub hero_tagline: String,
    pub hero_background_url: String,
    pub logo_url: String,
    pub hero_video_url: String,
    pub font_link: String,
    pub primary_font: String,
    pub item_name_font: String,
    pub price_font: String,
    pub button_font: String,
    pub contact: ContactSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_title: "Asian Cuisine".to_string(),
            hero_tagline: "Experience the Art of Asian Cuisine".to_string(),
            hero_background_url: String::new(),
            logo_url: "https://picsum.photos/100/100?random=logo".to_string(),
            hero_video_url: String::new(),
            font_link:
                "https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap"
                    .to_string(),
            primary_font: "Roboto".to_string(),
            item_name_font: "Roboto".to_string(),
            price_font: "Roboto".to_string(),
            button_font: "Roboto".to_string(),
            contact: ContactSettings::default(),
        }
    }
}

/// Contact and social links shown in the cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSettings {
    #[serde(default)]
    pub support_email: String,
    #[serde(default)]
    pub support_phone: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub google_review_url: String,
}

/// Stored appearance document (`menu_settings/main`); every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(
        rename = "heroText",
        alias = "heroTitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_video_url: Option<String>,
}

fn overlay(target: &mut String, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        *target = v.to_string();
    }
}

impl SiteSettings {
    /// Overlay a stored appearance document; blank values keep the current text
    pub fn apply_appearance(&mut self, patch: &AppearancePatch) {
        overlay(&mut self.logo_url, &patch.logo_url);
        overlay(&mut self.hero_title, &patch.hero_title);
        overlay(&mut self.hero_tagline, &patch.hero_tagline);
        overlay(&mut self.hero_video_url, &patch.hero_video_url);
    }

    /// Overlay a stored contact document; blank values keep the current text
    pub fn apply_contact(&mut self, doc: &ContactSettings) {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        overlay(&mut self.contact.support_email, &non_empty(&doc.support_email));
        overlay(&mut self.contact.support_phone, &non_empty(&doc.support_phone));
        overlay(&mut self.contact.instagram_url, &non_empty(&doc.instagram_url));
        overlay(
            &mut self.contact.google_review_url,
            &non_empty(&doc.google_review_url),
        );
    }

    /// Appearance fields persisted to the store
    pub fn appearance_patch(&self) -> AppearancePatch {
        AppearancePatch {
            logo_url: Some(self.logo_url.clone()),
            hero_title: Some(self.hero_title.clone()),
            hero_tagline: Some(self.hero_tagline.clone()),
            hero_video_url: Some(self.hero_video_url.clone()),
        }
    }
}
