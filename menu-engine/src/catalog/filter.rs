//! Menu listing filters (search, category, diet)

use shared::models::MenuItem;

/// Diet toggle state; veg-only and non-veg-only exclude each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DietFilter {
    #[default]
    All,
    VegOnly,
    NonVegOnly,
}

impl DietFilter {
    pub fn toggle_veg(self) -> Self {
        match self {
            DietFilter::VegOnly => DietFilter::All,
            _ => DietFilter::VegOnly,
        }
    }

    pub fn toggle_non_veg(self) -> Self {
        match self {
            DietFilter::NonVegOnly => DietFilter::All,
            _ => DietFilter::NonVegOnly,
        }
    }

    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            DietFilter::All => true,
            DietFilter::VegOnly => item.is_veg,
            DietFilter::NonVegOnly => !item.is_veg,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    /// Case-insensitive match on name or description
    pub query: String,
    /// Active category tab
    pub category: Option<String>,
    pub diet: DietFilter,
    /// Admin listing: search spans all categories, diet toggles ignored
    pub admin: bool,
}

impl MenuFilter {
    pub fn customer(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn admin(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            admin: true,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_diet(mut self, diet: DietFilter) -> Self {
        self.diet = diet;
        self
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let query = self.query.trim().to_lowercase();
        let searching = !query.is_empty();

        if searching
            && !item.name.to_lowercase().contains(&query)
            && !item.description.to_lowercase().contains(&query)
        {
            return false;
        }
        if (!searching || !self.admin)
            && let Some(category) = &self.category
            && item.category != *category
        {
            return false;
        }
        self.admin || self.diet.matches(item)
    }
}

/// Items passing `filter`, in catalog order
pub fn filter_items<'a>(items: &'a [MenuItem], filter: &MenuFilter) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
