//! Single-session order lifecycle.
//!
//! This crate provides the core state transitions of a shopping session:
//! - `Cart` collects product references and computes live-priced totals
//! - `Shopper` binds one cart and one order history and performs the
//!   cart → order transition behind an explicit confirmation decision
//! - `OrderHistory` archives every ordered item, most recent on top
//! - `PlacementState` describes the placement state machine

pub mod cart;
pub mod error;
pub mod history;
pub mod session;
pub mod state;

pub use cart::{Cart, CartLine, CartSnapshot};
pub use error::CheckoutError;
pub use history::{ArchivedItem, HistorySummary, OrderHistory};
pub use session::{Confirmation, OrderReceipt, Shopper};
pub use state::PlacementState;
