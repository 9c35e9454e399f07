//! Shopping cart for a single session.

use catalog::{Catalog, Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// Ordered collection of product references for one session.
///
/// Insertion order is display order; duplicates are allowed. The cart
/// holds IDs only — prices are read from the catalog at computation
/// time, never snapshotted, so a later price mutation changes the next
/// computed total even for items already in the cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<ProductId>,
}

/// One display line of a cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The referenced product.
    pub product_id: ProductId,

    /// Product name at snapshot time.
    pub name: String,

    /// Category name at snapshot time.
    pub category: String,

    /// Current price at snapshot time.
    pub unit_price: Money,
}

/// Full ordered cart contents plus the computed total.
///
/// Formatting and printing are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Sum of the current prices of all lines.
    pub total: Money,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product reference to the end of the cart.
    ///
    /// Returns the new total, the observable side effect of adding.
    /// Fails only for an ID the catalog never issued; nothing is added
    /// in that case.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> Result<Money, CheckoutError> {
        catalog.product(id)?;
        self.items.push(id);

        let total = self.total(catalog)?;
        tracing::debug!(%id, %total, items = self.items.len(), "item added to cart");
        Ok(total)
    }

    /// Removes the item at `index` (0-based).
    ///
    /// Exactly one element is removed and the relative order of the
    /// rest is preserved. An out-of-bounds index leaves the cart
    /// unchanged. Returns the removed product reference.
    pub fn remove(&mut self, index: usize) -> Result<ProductId, CheckoutError> {
        if index >= self.items.len() {
            return Err(CheckoutError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }

        let id = self.items.remove(index);
        tracing::debug!(%id, index, items = self.items.len(), "item removed from cart");
        Ok(id)
    }

    /// Sum of the current prices of all contained items.
    ///
    /// Zero for an empty cart.
    pub fn total(&self, catalog: &Catalog) -> Result<Money, CheckoutError> {
        let mut total = Money::zero();
        for &id in &self.items {
            total += catalog.price_of(id)?;
        }
        Ok(total)
    }

    /// Returns the full ordered contents plus the computed total.
    pub fn snapshot(&self, catalog: &Catalog) -> Result<CartSnapshot, CheckoutError> {
        let mut lines = Vec::with_capacity(self.items.len());
        let mut total = Money::zero();

        for &id in &self.items {
            let product = catalog.product(id)?;
            total += product.price();
            lines.push(CartLine {
                product_id: id,
                name: product.name().to_string(),
                category: product.category().to_string(),
                unit_price: product.price(),
            });
        }

        Ok(CartSnapshot { lines, total })
    }

    /// Empties the cart in place. Order history is unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items currently in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The contained product references, in insertion order.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }
}
