//! Order placement state machine.

use serde::{Deserialize, Serialize};

/// The state of an order placement attempt.
///
/// State transitions:
/// ```text
/// Idle ──► AwaitingConfirmation ──┬──► Placed
///                                 └──► Cancelled
/// ```
///
/// `Placed` and `Cancelled` are terminal for one attempt; a later
/// attempt on the same shopper starts the machine over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlacementState {
    /// No confirmation has been requested yet.
    #[default]
    Idle,

    /// The confirmation decision has been requested from the caller.
    AwaitingConfirmation,

    /// Cart archived into history and cleared (terminal state).
    Placed,

    /// Confirmation declined, nothing changed (terminal state).
    Cancelled,
}

impl PlacementState {
    /// Returns true if this is a terminal state for the attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlacementState::Placed | PlacementState::Cancelled)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementState::Idle => "Idle",
            PlacementState::AwaitingConfirmation => "AwaitingConfirmation",
            PlacementState::Placed => "Placed",
            PlacementState::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for PlacementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
