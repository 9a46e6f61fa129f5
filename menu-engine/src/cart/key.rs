//! Cart line identity
//!
//! Two selections land on the same cart line exactly when item id, size id
//! and the set of add-on ids are all equal. Add-on order and duplicates in
//! the caller's selection do not matter.

use std::collections::BTreeSet;
use std::fmt;

/// Composite identity of a cart line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    item_id: String,
    size_id: Option<String>,
    addon_ids: BTreeSet<String>,
}

impl LineKey {
    /// Build a key; a blank size id means "no size"
    pub fn new<I, S>(item_id: impl Into<String>, size_id: Option<&str>, addon_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item_id: item_id.into(),
            size_id: size_id.filter(|s| !s.is_empty()).map(str::to_string),
            addon_ids: addon_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Key of an item with nothing selected
    pub fn plain(item_id: impl Into<String>) -> Self {
        Self::new(item_id, None, Vec::<String>::new())
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn size_id(&self) -> Option<&str> {
        self.size_id.as_deref()
    }

    /// Selected add-on ids in sorted order
    pub fn addon_ids(&self) -> impl Iterator<Item = &str> + Clone {
        self.addon_ids.iter().map(String::as_str)
    }

    pub fn has_addon(&self, addon_id: &str) -> bool {
        self.addon_ids.contains(addon_id)
    }

    /// Whether the caller picked a size or at least one add-on
    pub fn has_selection(&self) -> bool {
        self.size_id.is_some() || !self.addon_ids.is_empty()
    }

    /// Same key with `addon_id` membership flipped
    pub fn with_toggled_addon(&self, addon_id: &str) -> Self {
        let mut next = self.clone();
        if !next.addon_ids.remove(addon_id) {
            next.addon_ids.insert(addon_id.to_string());
        }
        next
    }

    /// Stable content hash of the key, hex encoded
    ///
    /// Used as a compact identifier in logs and by presentation layers
    /// that need a string key per line.
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.item_id.as_bytes());
        hasher.update([0u8]);
        if let Some(size) = &self.size_id {
            hasher.update([1u8]);
            hasher.update(size.as_bytes());
        }
        hasher.update([0u8]);
        for addon in &self.addon_ids {
            hasher.update(addon.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item_id)?;
        if let Some(size) = &self.size_id {
            write!(f, "[{size}]")?;
        }
        if !self.addon_ids.is_empty() {
            let addons: Vec<&str> = self.addon_ids().collect();
            write!(f, "{{{}}}", addons.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addon_order_and_duplicates_ignored() {
        let a = LineKey::new("m1", None, ["a", "b"]);
        let b = LineKey::new("m1", None, ["b", "a", "a"]);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_each_component_distinguishes() {
        let base = LineKey::new("m1", Some("s1"), ["a"]);
        assert_ne!(base, LineKey::new("m2", Some("s1"), ["a"]));
        assert_ne!(base, LineKey::new("m1", Some("s2"), ["a"]));
        assert_ne!(base, LineKey::new("m1", None, ["a"]));
        assert_ne!(base, LineKey::new("m1", Some("s1"), ["b"]));
        assert_ne!(base.fingerprint(), LineKey::new("m1", None, ["a"]).fingerprint());
    }

    #[test]
    fn test_blank_size_is_no_size() {
        assert_eq!(LineKey::new("m1", Some(""), ["a"]), LineKey::new("m1", None, ["a"]));
        assert_eq!(LineKey::new("m1", Some(""), Vec::<String>::new()), LineKey::plain("m1"));
    }

    #[test]
    fn test_fingerprint_separates_fields() {
        // "ab" + no addons must not collide with "a" + addon "b"
        let left = LineKey::new("ab", None, Vec::<String>::new());
        let right = LineKey::new("a", None, ["b"]);
        assert_ne!(left.fingerprint(), right.fingerprint());
        assert_eq!(left.fingerprint().len(), 64);
    }

    #[test]
    fn test_toggle() {
        let key = LineKey::new("m1", None, ["a"]);
        let added = key.with_toggled_addon("b");
        assert!(added.has_addon("a") && added.has_addon("b"));
        let removed = added.with_toggled_addon("a");
        assert_eq!(removed, LineKey::new("m1", None, ["b"]));
        assert!(removed.with_toggled_addon("b").addon_ids().next().is_none());
    }

    #[test]
    fn test_display() {
        let key = LineKey::new("m1", Some("h2"), ["b", "a"]);
        assert_eq!(key.to_string(), "m1[h2]{a,b}");
        assert_eq!(LineKey::plain("m1").to_string(), "m1");
    }
}
