//! Catalog error types.

use thiserror::Error;

use crate::value_objects::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product registered under the given ID.
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: i64 },

    /// Discount percentage outside the accepted range.
    #[error("Invalid discount percentage: {percentage} (must be within 0..=100)")]
    InvalidDiscount { percentage: f64 },
}
