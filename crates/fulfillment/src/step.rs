//! Fulfillment step names.

use serde::{Deserialize, Serialize};

/// The fixed, ordered fulfillment steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentStep {
    /// Check inventory for the order.
    InventoryCheck,

    /// Verify payment for the order.
    PaymentVerification,

    /// Prepare the shipment.
    ShipmentPreparation,
}

impl FulfillmentStep {
    /// Every step, in processing order.
    pub const ALL: [FulfillmentStep; 3] = [
        FulfillmentStep::InventoryCheck,
        FulfillmentStep::PaymentVerification,
        FulfillmentStep::ShipmentPreparation,
    ];

    /// Returns the step name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentStep::InventoryCheck => "inventory_check",
            FulfillmentStep::PaymentVerification => "payment_verification",
            FulfillmentStep::ShipmentPreparation => "shipment_preparation",
        }
    }
}

impl std::fmt::Display for FulfillmentStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
