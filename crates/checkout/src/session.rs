//! Shopper aggregate and the cart → order transition.

use catalog::{Catalog, Money};
use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::history::OrderHistory;
use crate::state::PlacementState;

/// A pre-resolved order confirmation decision.
///
/// The decision is supplied by the caller; the core never reads input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confirmation {
    /// The caller confirmed the order.
    Confirmed,

    /// The caller declined, or gave no usable answer.
    Declined,
}

impl Confirmation {
    /// Interprets a raw response string.
    ///
    /// Case-insensitive `y` or `yes` confirms; anything else, malformed
    /// input included, declines.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        }
    }

    /// Returns true for [`Confirmation::Confirmed`].
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Receipt for a successfully placed order.
///
/// This is the token the caller forwards to the fulfillment queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// The customer who placed the order.
    pub customer_id: CustomerId,

    /// Display name of the customer.
    pub customer_name: String,

    /// Number of items in the order.
    pub item_count: usize,

    /// Total amount at placement time.
    pub total: Money,

    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Aggregate root binding one cart and one order history.
///
/// Owns both for the lifetime of the session and performs the
/// cart → order transition. The display name is not unique; the
/// generated [`CustomerId`] is the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shopper {
    id: CustomerId,
    name: String,
    cart: Cart,
    history: OrderHistory,

    /// State of the most recent placement attempt.
    #[serde(default)]
    last_placement: PlacementState,
}

impl Shopper {
    /// Creates a shopper with an empty cart and history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            cart: Cart::new(),
            history: OrderHistory::new(),
            last_placement: PlacementState::Idle,
        }
    }

    /// Returns the customer ID.
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the cart for mutation.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Returns the order history.
    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    /// State reached by the most recent placement attempt.
    ///
    /// `Idle` until the first attempt requests confirmation.
    pub fn last_placement(&self) -> PlacementState {
        self.last_placement
    }

    /// Converts the cart into a placed order.
    ///
    /// An empty cart fails with [`CheckoutError::EmptyCart`] before any
    /// state changes. Otherwise the attempt moves to
    /// `AwaitingConfirmation` and resolves with the caller's decision:
    /// a declined decision ends in `Cancelled` with cart and history
    /// untouched; a confirmed decision archives every cart item into
    /// the history in cart order and clears the cart. The caller
    /// observes either "nothing changed" or "fully archived + cart
    /// emptied" — there is no partial archival.
    #[tracing::instrument(skip(self, catalog), fields(customer = %self.name))]
    pub fn place_order(
        &mut self,
        catalog: &Catalog,
        decision: Confirmation,
    ) -> Result<OrderReceipt, CheckoutError> {
        if self.cart.is_empty() {
            tracing::warn!("placement attempted with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        self.last_placement = PlacementState::AwaitingConfirmation;
        tracing::debug!(state = %self.last_placement, "confirmation requested");

        if !decision.is_confirmed() {
            self.last_placement = PlacementState::Cancelled;
            tracing::info!(state = %self.last_placement, "order cancelled");
            return Err(CheckoutError::OrderCancelled);
        }

        // The total is the only fallible step; compute it before any
        // mutation so a failure leaves cart and history untouched.
        let total = self.cart.total(catalog)?;
        let item_count = self.cart.len();

        self.history.archive(self.cart.items().iter().copied());
        self.cart.clear();

        self.last_placement = PlacementState::Placed;
        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(state = %self.last_placement, item_count, %total, "order placed");

        Ok(OrderReceipt {
            customer_id: self.id,
            customer_name: self.name.clone(),
            item_count,
            total,
            placed_at: Utc::now(),
        })
    }
}
