//! Catalog entries and price mutation.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::value_objects::Money;

/// Category-specific attributes of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ProductKind {
    /// Electronic goods with a manufacturer warranty.
    Electronics { brand: String, warranty_months: u32 },

    /// Apparel.
    Clothing { size: String, material: String },

    /// Printed books.
    Book { author: String, pages: u32 },
}

impl ProductKind {
    /// Returns the category name as a string.
    pub fn category(&self) -> &'static str {
        match self {
            ProductKind::Electronics { .. } => "Electronics",
            ProductKind::Clothing { .. } => "Clothing",
            ProductKind::Book { .. } => "Book",
        }
    }
}

/// A catalog entry.
///
/// Created once at catalog load; everything but the price is immutable
/// afterwards. Price mutations go through [`Product::set_price`] or
/// [`apply_discount`], both of which keep the price non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    kind: ProductKind,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, price: Money, kind: ProductKind) -> Self {
        Self {
            name: name.into(),
            price,
            kind,
        }
    }

    /// Creates an electronics product.
    pub fn electronics(
        name: impl Into<String>,
        price: Money,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self::new(
            name,
            price,
            ProductKind::Electronics {
                brand: brand.into(),
                warranty_months,
            },
        )
    }

    /// Creates a clothing product.
    pub fn clothing(
        name: impl Into<String>,
        price: Money,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            price,
            ProductKind::Clothing {
                size: size.into(),
                material: material.into(),
            },
        )
    }

    /// Creates a book product.
    pub fn book(
        name: impl Into<String>,
        price: Money,
        author: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self::new(
            name,
            price,
            ProductKind::Book {
                author: author.into(),
                pages,
            },
        )
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Updates the price in place.
    ///
    /// Negative amounts are rejected and leave the price unchanged.
    pub fn set_price(&mut self, price: Money) -> Result<(), CatalogError> {
        if price.is_negative() {
            return Err(CatalogError::NegativePrice {
                price: price.cents(),
            });
        }
        self.price = price;
        Ok(())
    }

    /// Returns the category-specific attributes.
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Returns the category name as a string.
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ProductKind::Electronics {
                brand,
                warranty_months,
            } => write!(
                f,
                "Electronics: {}, Brand: {}, Price: {}, Warranty: {} months",
                self.name, brand, self.price, warranty_months
            ),
            ProductKind::Clothing { size, material } => write!(
                f,
                "Clothing: {}, Size: {}, Material: {}, Price: {}",
                self.name, size, material, self.price
            ),
            ProductKind::Book { author, pages } => write!(
                f,
                "Book: {}, Author: {}, Pages: {}, Price: {}",
                self.name, author, pages, self.price
            ),
        }
    }
}

/// Applies a percentage discount to a product's price in place.
///
/// The price is reduced by `price * percentage / 100`, rounded to the
/// nearest cent. Percentages outside `0..=100` are rejected and leave
/// the price unchanged, so the price can never cross zero. Returns the
/// new price.
pub fn apply_discount(product: &mut Product, percentage: f64) -> Result<Money, CatalogError> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(CatalogError::InvalidDiscount { percentage });
    }

    let cents = product.price.cents();
    let reduction = (cents as f64 * percentage / 100.0).round() as i64;
    product.price = Money::from_cents(cents - reduction);

    tracing::debug!(name = product.name(), percentage, new_price = %product.price, "discount applied");
    Ok(product.price)
}
