//! Category Model

use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.6;
pub const MIN_OVERLAY_OPACITY: f64 = 0.1;
pub const MAX_OVERLAY_OPACITY: f64 = 0.9;

/// Hero video parallax speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParallaxSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

/// Category appearance config
///
/// Stored one document per category in `category_settings`, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    /// Category name (also the document key)
    pub category: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub fallback_image: String,
    #[serde(default)]
    pub parallax_speed: ParallaxSpeed,
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f64,
    #[serde(default = "default_title_x")]
    pub hero_title_x: i32,
    #[serde(default = "default_title_y")]
    pub hero_title_y: i32,
    #[serde(default = "default_tagline_x")]
    pub hero_tagline_x: i32,
    #[serde(default = "default_tagline_y")]
    pub hero_tagline_y: i32,
    /// Sort key; categories without one sort last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

fn default_overlay_opacity() -> f64 {
    DEFAULT_OVERLAY_OPACITY
}

fn default_title_x() -> i32 {
    24
}

fn default_title_y() -> i32 {
    140
}

fn default_tagline_x() -> i32 {
    24
}

fn default_tagline_y() -> i32 {
    80
}

impl CategoryConfig {
    /// New category with default appearance
    pub fn new(category: impl Into<String>, order: i32) -> Self {
        Self {
            category: category.into(),
            video_url: String::new(),
            fallback_image: String::new(),
            parallax_speed: ParallaxSpeed::default(),
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            hero_title_x: default_title_x(),
            hero_title_y: default_title_y(),
            hero_tagline_x: default_tagline_x(),
            hero_tagline_y: default_tagline_y(),
            order: Some(order),
        }
    }

    /// Opacity clamped to the allowed overlay range
    pub fn clamped_opacity(&self) -> f64 {
        self.overlay_opacity
            .clamp(MIN_OVERLAY_OPACITY, MAX_OVERLAY_OPACITY)
    }
}
