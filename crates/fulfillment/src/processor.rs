//! FIFO order processor.

use std::collections::VecDeque;

use checkout::OrderReceipt;
use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::error::FulfillmentError;
use crate::services::{
    InventoryCheck, PaymentVerification, ShipmentPreparation, SimulatedInventory,
    SimulatedPayments, SimulatedShipping,
};
use crate::step::FulfillmentStep;

/// An order waiting in the processing queue.
///
/// Opaque to the processor beyond what the receipt carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    /// The placed order.
    pub receipt: OrderReceipt,

    /// When the order entered the queue.
    pub submitted_at: DateTime<Utc>,
}

impl PendingOrder {
    /// Wraps a receipt for submission.
    pub fn new(receipt: OrderReceipt) -> Self {
        Self {
            receipt,
            submitted_at: Utc::now(),
        }
    }
}

/// Result of one completed fulfillment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Which step ran.
    pub step: FulfillmentStep,

    /// Reference minted by the step service.
    pub reference: String,
}

/// Outcome of processing one pending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentReport {
    /// The customer whose order was processed.
    pub customer_id: CustomerId,

    /// Display name of the customer.
    pub customer_name: String,

    /// Step results in processing order.
    pub steps: Vec<StepReport>,

    /// When processing finished.
    pub processed_at: DateTime<Utc>,
}

/// FIFO queue of pending orders with simulated fulfillment.
///
/// Strict arrival order is preserved and each [`process_next`] call
/// consumes exactly one entry. There is no automatic draining loop; the
/// calling layer decides when and how often to process.
///
/// [`process_next`]: OrderProcessor::process_next
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor<I, P, S> {
    queue: VecDeque<PendingOrder>,
    inventory: I,
    payments: P,
    shipping: S,
}

impl OrderProcessor<SimulatedInventory, SimulatedPayments, SimulatedShipping> {
    /// A processor wired to the simulated step services.
    pub fn simulated() -> Self {
        Self::default()
    }
}

impl<I, P, S> OrderProcessor<I, P, S>
where
    I: InventoryCheck,
    P: PaymentVerification,
    S: ShipmentPreparation,
{
    /// Creates a processor over the given step services.
    pub fn new(inventory: I, payments: P, shipping: S) -> Self {
        Self {
            queue: VecDeque::new(),
            inventory,
            payments,
            shipping,
        }
    }

    /// Enqueues an order at the tail of the queue.
    ///
    /// Always succeeds; returns the new queue depth.
    pub fn submit(&mut self, order: PendingOrder) -> usize {
        tracing::info!(
            customer = %order.receipt.customer_name,
            total = %order.receipt.total,
            "order added to processing queue"
        );
        self.queue.push_back(order);

        let depth = self.queue.len();
        metrics::gauge!("pending_orders").set(depth as f64);
        depth
    }

    /// Dequeues the head entry and runs the fixed fulfillment sequence.
    ///
    /// An empty queue is a reported no-op, never a crash.
    #[tracing::instrument(skip(self))]
    pub fn process_next(&mut self) -> Result<FulfillmentReport, FulfillmentError> {
        let order = self
            .queue
            .pop_front()
            .ok_or(FulfillmentError::NoPendingOrders)?;
        metrics::gauge!("pending_orders").set(self.queue.len() as f64);

        let receipt = order.receipt;
        tracing::info!(
            customer = %receipt.customer_name,
            total = %receipt.total,
            "processing order"
        );

        let steps = vec![
            StepReport {
                step: FulfillmentStep::InventoryCheck,
                reference: self.inventory.check(receipt.customer_id),
            },
            StepReport {
                step: FulfillmentStep::PaymentVerification,
                reference: self.payments.verify(receipt.customer_id, receipt.total),
            },
            StepReport {
                step: FulfillmentStep::ShipmentPreparation,
                reference: self.shipping.prepare(receipt.customer_id),
            },
        ];

        metrics::counter!("orders_processed_total").increment(1);
        tracing::info!(customer = %receipt.customer_name, "order processed successfully");

        Ok(FulfillmentReport {
            customer_id: receipt.customer_id,
            customer_name: receipt.customer_name,
            steps,
            processed_at: Utc::now(),
        })
    }

    /// Current queue length.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// The inventory step service.
    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    /// The payment step service.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    /// The shipping step service.
    pub fn shipping(&self) -> &S {
        &self.shipping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Money;

    fn receipt(name: &str, cents: i64) -> OrderReceipt {
        OrderReceipt {
            customer_id: CustomerId::new(),
            customer_name: name.to_string(),
            item_count: 1,
            total: Money::from_cents(cents),
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn submit_grows_the_queue() {
        let mut processor = OrderProcessor::simulated();
        assert_eq!(processor.pending_count(), 0);

        let depth = processor.submit(PendingOrder::new(receipt("Ada", 1000)));
        assert_eq!(depth, 1);

        let depth = processor.submit(PendingOrder::new(receipt("Grace", 2000)));
        assert_eq!(depth, 2);
        assert_eq!(processor.pending_count(), 2);
    }

    #[test]
    fn process_next_consumes_in_arrival_order() {
        let mut processor = OrderProcessor::simulated();
        processor.submit(PendingOrder::new(receipt("Ada", 1000)));
        processor.submit(PendingOrder::new(receipt("Grace", 2000)));
        processor.submit(PendingOrder::new(receipt("Edsger", 3000)));

        assert_eq!(processor.process_next().unwrap().customer_name, "Ada");
        assert_eq!(processor.process_next().unwrap().customer_name, "Grace");
        assert_eq!(processor.process_next().unwrap().customer_name, "Edsger");
        assert_eq!(processor.pending_count(), 0);
    }

    #[test]
    fn process_next_handles_exactly_one_entry() {
        let mut processor = OrderProcessor::simulated();
        processor.submit(PendingOrder::new(receipt("Ada", 1000)));
        processor.submit(PendingOrder::new(receipt("Grace", 2000)));

        processor.process_next().unwrap();
        assert_eq!(processor.pending_count(), 1);
    }

    #[test]
    fn empty_queue_is_a_reported_no_op() {
        let mut processor = OrderProcessor::simulated();

        let result = processor.process_next();
        assert!(matches!(result, Err(FulfillmentError::NoPendingOrders)));
        assert_eq!(processor.pending_count(), 0);
    }

    #[test]
    fn report_lists_steps_in_the_fixed_order() {
        let mut processor = OrderProcessor::simulated();
        processor.submit(PendingOrder::new(receipt("Ada", 1000)));

        let report = processor.process_next().unwrap();

        let steps: Vec<_> = report.steps.iter().map(|s| s.step).collect();
        assert_eq!(steps, FulfillmentStep::ALL);
        assert_eq!(report.steps[0].reference, "CHK-0001");
        assert_eq!(report.steps[1].reference, "PAY-0001");
        assert_eq!(report.steps[2].reference, "SHP-0001");
    }

    #[test]
    fn references_increment_across_orders() {
        let mut processor = OrderProcessor::simulated();
        processor.submit(PendingOrder::new(receipt("Ada", 1000)));
        processor.submit(PendingOrder::new(receipt("Grace", 2000)));

        processor.process_next().unwrap();
        let report = processor.process_next().unwrap();

        assert_eq!(report.steps[0].reference, "CHK-0002");
        assert_eq!(processor.inventory().check_count(), 2);
        assert_eq!(processor.payments().verification_count(), 2);
        assert_eq!(processor.shipping().shipment_count(), 2);
    }

    #[test]
    fn report_serialization_roundtrip() {
        let mut processor = OrderProcessor::simulated();
        processor.submit(PendingOrder::new(receipt("Ada", 1000)));

        let report = processor.process_next().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: FulfillmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
