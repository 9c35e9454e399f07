//! Shipment preparation step: trait and simulated implementation.

use common::CustomerId;

/// Trait for the shipment preparation fulfillment step.
pub trait ShipmentPreparation {
    /// Prepares a shipment for an order and returns a shipment reference.
    fn prepare(&mut self, customer_id: CustomerId) -> String;
}

/// Simulated shipping service minting sequential shipment references.
#[derive(Debug, Clone, Default)]
pub struct SimulatedShipping {
    next_id: u32,
}

impl SimulatedShipping {
    /// Creates a new simulated shipping service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shipments prepared.
    pub fn shipment_count(&self) -> u32 {
        self.next_id
    }
}

impl ShipmentPreparation for SimulatedShipping {
    fn prepare(&mut self, customer_id: CustomerId) -> String {
        self.next_id += 1;
        let reference = format!("SHP-{:04}", self.next_id);
        tracing::info!(%customer_id, %reference, "preparing shipment");
        reference
    }
}
