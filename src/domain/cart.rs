use super::{ItemId, MenuItem};

/// A requested quantity of one menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// A student's cart. Entries keep the order in which items were first added.
///
/// Carts are transient: they live inside a checkout session and are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item_id`, merging with an existing entry.
    pub fn add(&mut self, item_id: ItemId, quantity: u32) {
        match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(CartEntry { item_id, quantity }),
        }
    }

    /// Builder-style [`Cart::add`].
    pub fn with(mut self, item_id: impl Into<ItemId>, quantity: u32) -> Self {
        self.add(item_id.into(), quantity);
        self
    }

    /// Removes one unit of `item_id`, dropping the entry when it reaches zero.
    pub fn remove_one(&mut self, item_id: &ItemId) {
        if let Some(pos) = self.entries.iter().position(|e| &e.item_id == item_id) {
            if self.entries[pos].quantity > 1 {
                self.entries[pos].quantity -= 1;
            } else {
                self.entries.remove(pos);
            }
        }
    }

    pub fn quantity_of(&self, item_id: &ItemId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.item_id == item_id)
            .map_or(0, |e| e.quantity)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Preview total against a menu listing. Items missing from `menu` are skipped.
    ///
    /// The committed order snapshots prices again, so this is only an estimate.
    pub fn estimate_total(&self, menu: &[MenuItem]) -> f64 {
        self.entries
            .iter()
            .filter_map(|entry| {
                menu.iter()
                    .find(|item| item.id == entry.item_id)
                    .map(|item| item.price * f64::from(entry.quantity))
            })
            .sum()
    }
}
