//! Checkout error types.

use catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur during cart and order operations.
///
/// Every condition is reported to the caller; none is fatal.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Cart removal index out of bounds.
    #[error("Invalid item index: {index} (cart has {len} items)")]
    InvalidIndex { index: usize, len: usize },

    /// Order placement attempted with no items in the cart.
    #[error("The cart is empty, the order cannot be placed")]
    EmptyCart,

    /// Confirmation was declined; cart and history are unchanged.
    #[error("Order cancelled")]
    OrderCancelled,

    /// Order history queried while empty.
    #[error("No order history available")]
    EmptyHistory,

    /// A catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
