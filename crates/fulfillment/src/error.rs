//! Fulfillment error types.

use thiserror::Error;

/// Errors that can occur during fulfillment processing.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// The processing queue is empty; nothing was done.
    #[error("No orders to process")]
    NoPendingOrders,
}
