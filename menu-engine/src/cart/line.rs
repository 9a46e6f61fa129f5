//! Cart line value record

use super::key::LineKey;
use crate::pricing::resolve_unit_price;
use rust_decimal::Decimal;
use shared::models::{AddOn, MenuItem, Size};
use std::fmt;

/// Internal line handle, stable across re-keying (add-on toggles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

/// One cart line: an item snapshot, a selection and a quantity
///
/// The item is copied at add time, so catalog edits made later do not
/// re-price lines already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub(crate) id: LineId,
    pub(crate) key: LineKey,
    pub(crate) item: MenuItem,
    pub(crate) quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn key(&self) -> &LineKey {
        &self.key
    }

    /// Item snapshot taken when the line was created
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Always at least 1
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        resolve_unit_price(&self.item, self.key.size_id(), self.key.addon_ids())
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    /// Selected size, if it still exists in the snapshot
    pub fn selected_size(&self) -> Option<&Size> {
        self.key.size_id().and_then(|id| self.item.find_size(id))
    }

    /// Selected add-ons present in the snapshot, in menu order
    pub fn selected_addons(&self) -> Vec<&AddOn> {
        self.item
            .addons
            .iter()
            .filter(|addon| self.key.has_addon(&addon.id))
            .collect()
    }
}
