//! Payment verification step: trait and simulated implementation.

use catalog::Money;
use common::CustomerId;

/// Trait for the payment verification fulfillment step.
pub trait PaymentVerification {
    /// Verifies payment for an order and returns a payment reference.
    fn verify(&mut self, customer_id: CustomerId, amount: Money) -> String;
}

/// Simulated payment service minting sequential payment references.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPayments {
    next_id: u32,
}

impl SimulatedPayments {
    /// Creates a new simulated payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of verifications performed.
    pub fn verification_count(&self) -> u32 {
        self.next_id
    }
}

impl PaymentVerification for SimulatedPayments {
    fn verify(&mut self, customer_id: CustomerId, amount: Money) -> String {
        self.next_id += 1;
        let reference = format!("PAY-{:04}", self.next_id);
        tracing::info!(%customer_id, %amount, %reference, "verifying payment");
        reference
    }
}
