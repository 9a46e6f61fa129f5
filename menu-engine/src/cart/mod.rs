//! Cart aggregate and merge engine
//!
//! # 行合并规则
//!
//! ```text
//! add_selection(item, size, addons)
//!     ├─ 1. Sold out?               → Err(SoldOut)
//!     ├─ 2. Options but no choice?  → CustomizationRequired (nothing added)
//!     ├─ 3. key = (item, size, {addons})
//!     └─ 4. key exists ? quantity += 1 : append line (quantity 1)
//! ```
//!
//! All mutations take `&mut self`; a cart belongs to one session.

mod error;
mod key;
mod line;

pub use error::{CartError, CartResult};
pub use key::LineKey;
pub use line::{CartLine, LineId};

use rust_decimal::Decimal;
use shared::models::MenuItem;

/// Result of adding a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item has sizes or add-ons and none were chosen; open the customization step
    CustomizationRequired,
    /// A new line was appended with quantity 1
    Inserted { line_id: LineId },
    /// An identical line existed; its quantity was incremented
    Merged { line_id: LineId, quantity: u32 },
}

/// Result of toggling an add-on on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The line now lives under the new key
    Rekeyed { line_id: LineId, key: LineKey },
    /// Another line already had the new key; quantities were combined into it
    Merged { line_id: LineId, quantity: u32 },
}

/// Result of a quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(u32),
    Removed,
}

/// Ordered collection of cart lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a selection, gated on customization
    ///
    /// An item with sizes or add-ons needs a size or at least one add-on;
    /// otherwise nothing is added and the caller should collect a choice
    /// and call [`Cart::add_customized`].
    pub fn add_selection<I, S>(
        &mut self,
        item: &MenuItem,
        size_id: Option<&str>,
        addon_ids: I,
    ) -> CartResult<AddOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ensure_available(item)?;
        let key = LineKey::new(item.id.clone(), size_id, addon_ids);
        if item.has_options() && !key.has_selection() {
            tracing::debug!(item_id = %item.id, "Customization required before adding");
            return Ok(AddOutcome::CustomizationRequired);
        }
        Ok(self.insert_or_merge(item, key))
    }

    /// Add one unit of a selection confirmed in the customization step
    ///
    /// Skips the customization gate, so an empty selection is accepted.
    pub fn add_customized<I, S>(
        &mut self,
        item: &MenuItem,
        size_id: Option<&str>,
        addon_ids: I,
    ) -> CartResult<AddOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ensure_available(item)?;
        let key = LineKey::new(item.id.clone(), size_id, addon_ids);
        Ok(self.insert_or_merge(item, key))
    }

    fn insert_or_merge(&mut self, item: &MenuItem, key: LineKey) -> AddOutcome {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(key = %line.key, quantity = line.quantity, "Merged into existing line");
            return AddOutcome::Merged {
                line_id: line.id,
                quantity: line.quantity,
            };
        }

        let line_id = self.allocate_id();
        tracing::debug!(key = %key, line_id = %line_id, "Inserted new line");
        self.lines.push(CartLine {
            id: line_id,
            key,
            item: item.clone(),
            quantity: 1,
        });
        AddOutcome::Inserted { line_id }
    }

    fn allocate_id(&mut self) -> LineId {
        self.next_line_id += 1;
        LineId(self.next_line_id)
    }

    fn position(&self, key: &LineKey) -> CartResult<usize> {
        self.lines
            .iter()
            .position(|l| &l.key == key)
            .ok_or_else(|| CartError::LineNotFound(key.to_string()))
    }

    /// Flip one add-on on the line identified by `key`
    ///
    /// The line is re-keyed in place. If another line already carries the
    /// resulting key, the toggled line is folded into it (quantities add up,
    /// the other line keeps its position and snapshot).
    pub fn toggle_addon(&mut self, key: &LineKey, addon_id: &str) -> CartResult<ToggleOutcome> {
        let idx = self.position(key)?;
        let next_key = key.with_toggled_addon(addon_id);

        if let Some(target) = self.lines.iter().position(|l| l.key == next_key) {
            let moved = self.lines.remove(idx);
            let target = if target > idx { target - 1 } else { target };
            let line = &mut self.lines[target];
            line.quantity = line.quantity.saturating_add(moved.quantity);
            tracing::debug!(from = %key, into = %line.key, quantity = line.quantity, "Toggle collided, lines merged");
            return Ok(ToggleOutcome::Merged {
                line_id: line.id,
                quantity: line.quantity,
            });
        }

        let line = &mut self.lines[idx];
        line.key = next_key.clone();
        tracing::debug!(from = %key, to = %next_key, "Line re-keyed");
        Ok(ToggleOutcome::Rekeyed {
            line_id: line.id,
            key: next_key,
        })
    }

    /// Add `delta` to a line's quantity; a result of zero or less removes the line
    pub fn update_quantity(&mut self, key: &LineKey, delta: i32) -> CartResult<QuantityChange> {
        let idx = self.position(key)?;
        let next = i64::from(self.lines[idx].quantity) + i64::from(delta);
        if next <= 0 {
            self.lines.remove(idx);
            tracing::debug!(key = %key, "Line removed by quantity change");
            return Ok(QuantityChange::Removed);
        }
        let next = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[idx].quantity = next;
        Ok(QuantityChange::Updated(next))
    }

    /// Remove the line with `key`; no-op when absent
    pub fn remove_line(&mut self, key: &LineKey) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| &l.key == key)?;
        Some(self.lines.remove(idx))
    }

    /// Drop every line for a menu item, returning how many were removed
    pub fn remove_item(&mut self, item_id: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| l.key.item_id() != item_id);
        before - self.lines.len()
    }

    /// Drop every line whose item snapshot belongs to `category`
    pub fn remove_category(&mut self, category: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.category != category);
        before - self.lines.len()
    }

    pub fn find(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.key == key)
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ unit price × quantity, unrounded
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// No taxes, fees or discounts apply
    pub fn total(&self) -> Decimal {
        self.subtotal()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

fn ensure_available(item: &MenuItem) -> CartResult<()> {
    if !item.is_available {
        tracing::debug!(item_id = %item.id, "Rejected sold-out item");
        return Err(CartError::SoldOut(item.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
