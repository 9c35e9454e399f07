//! Fulfillment step services.
//!
//! One trait per step, with simulated in-memory implementations. The
//! simulations announce the step and mint a sequential reference ID;
//! they hold no real stock, money, or shipments.

mod inventory;
mod payment;
mod shipping;

pub use inventory::{InventoryCheck, SimulatedInventory};
pub use payment::{PaymentVerification, SimulatedPayments};
pub use shipping::{ShipmentPreparation, SimulatedShipping};
