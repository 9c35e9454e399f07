//! Append-only product registry.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::product::{Product, apply_discount};
use crate::value_objects::{Money, ProductId};

/// Append-only arena owning every product in the system.
///
/// Products are registered at catalog load and never removed, so every
/// issued [`ProductId`] stays valid for the catalog's lifetime. Carts
/// and order histories refer to products by ID; prices are always read
/// through the catalog, so a price mutation is visible to every holder
/// of the ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product and returns its handle.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = ProductId::new(self.products.len() as u32);
        tracing::debug!(%id, name = product.name(), "product registered");
        self.products.push(product);
        metrics::gauge!("catalog_products").set(self.products.len() as f64);
        id
    }

    /// Returns the product for `id`, if the catalog issued it.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.index())
    }

    /// Looks up a product, failing for IDs this catalog never issued.
    pub fn product(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.get(id).ok_or(CatalogError::ProductNotFound { id })
    }

    /// Returns the current price of a product.
    pub fn price_of(&self, id: ProductId) -> Result<Money, CatalogError> {
        Ok(self.product(id)?.price())
    }

    /// Updates a product's price in place.
    pub fn set_price(&mut self, id: ProductId, price: Money) -> Result<(), CatalogError> {
        self.product_mut(id)?.set_price(price)
    }

    /// Applies a percentage discount to a product's price in place.
    ///
    /// Returns the new price.
    pub fn apply_discount(&mut self, id: ProductId, percentage: f64) -> Result<Money, CatalogError> {
        apply_discount(self.product_mut(id)?, percentage)
    }

    /// Number of live products. Diagnostic only.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no products are registered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| (ProductId::new(index as u32), product))
    }

    fn product_mut(&mut self, id: ProductId) -> Result<&mut Product, CatalogError> {
        self.products
            .get_mut(id.index())
            .ok_or(CatalogError::ProductNotFound { id })
    }
}
