//! Fulfillment pipeline: FIFO order queue and simulated steps.
//!
//! Confirmed orders enter the queue via `submit` and are consumed one
//! per `process_next` call, in strict arrival order, through a fixed
//! step sequence:
//! 1. Inventory check
//! 2. Payment verification
//! 3. Shipment preparation
//!
//! Steps are simulated announcements with no effect on catalog, cart,
//! or history state. There is no retry, no backoff, and no draining
//! loop; the calling layer decides when to process.

pub mod error;
pub mod processor;
pub mod services;
pub mod step;

pub use error::FulfillmentError;
pub use processor::{FulfillmentReport, OrderProcessor, PendingOrder, StepReport};
pub use services::{
    InventoryCheck, PaymentVerification, ShipmentPreparation, SimulatedInventory,
    SimulatedPayments, SimulatedShipping,
};
pub use step::FulfillmentStep;
