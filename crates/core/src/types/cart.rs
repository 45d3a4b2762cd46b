//! The cart engine.
//!
//! A cart is an ordered list of [`CartItem`]s keyed by (product id, size).
//! Invariants maintained by every operation:
//!
//! - no two items share the same (product id, size) pair; adding an
//!   existing pair increments its quantity instead of appending;
//! - every quantity is at least 1; decrements clamp at 1 and only an
//!   explicit removal takes an item out.
//!
//! The total is derived, never stored.

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// A product snapshot bound to a chosen size and quantity.
///
/// Serialized flat: the product fields followed by `selectedSize` and
/// `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Copy of the product as it was when first added.
    #[serde(flatten)]
    pub product: Product,
    /// The chosen size label.
    pub selected_size: String,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Whether this item is the entry for (`id`, `size`).
    #[must_use]
    pub fn is(&self, id: &ProductId, size: &str) -> bool {
        self.product.id == *id && self.selected_size == size
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopper's bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the entry for (`id`, `size`).
    #[must_use]
    pub fn get(&self, id: &ProductId, size: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.is(id, size))
    }

    /// Add one unit of `product` in `size`.
    ///
    /// Merges into the existing entry when the pair is already present,
    /// otherwise appends a snapshot of the product with quantity 1.
    pub fn add(&mut self, product: &Product, size: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.is(&product.id, size)) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            selected_size: size.to_owned(),
            quantity: 1,
        });
    }

    /// Remove the entry for (`id`, `size`). Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId, size: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.is(id, size));
        self.items.len() != before
    }

    /// Adjust the quantity of (`id`, `size`) by `delta`, floored at 1.
    ///
    /// Returns the new quantity, or `None` when no such entry exists.
    pub fn update_quantity(&mut self, id: &ProductId, size: &str, delta: i64) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.is(id, size))?;
        let next = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities (the bag badge count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |acc, item| acc.saturating_add(item.quantity))
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Build a cart from persisted items, re-establishing the invariants.
    ///
    /// Duplicate (id, size) pairs are merged and zero quantities are raised
    /// to 1, so a hand-edited or legacy record cannot break the engine.
    fn from(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            item.quantity = item.quantity.max(1);
            if let Some(existing) = cart
                .items
                .iter_mut()
                .find(|e| e.is(&item.product.id, &item.selected_size))
            {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            } else {
                cart.items.push(item);
            }
        }
        cart
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
