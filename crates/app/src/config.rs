//! Application configuration loaded from environment variables.

use checkout::Confirmation;

/// Session configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `SHOPPER` — customer display name (default: `"Guest"`)
/// - `CONFIRM_ORDER` — order confirmation answer, interpreted like a
///   prompt response (default: `"yes"`)
/// - `RUST_LOG` — tracing filter directive (handled by the subscriber)
#[derive(Debug, Clone)]
pub struct Config {
    pub shopper: String,
    pub confirm: Confirmation,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            shopper: std::env::var("SHOPPER").unwrap_or_else(|_| "Guest".to_string()),
            confirm: std::env::var("CONFIRM_ORDER")
                .map(|answer| Confirmation::from_input(&answer))
                .unwrap_or(Confirmation::Confirmed),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shopper: "Guest".to_string(),
            confirm: Confirmation::Confirmed,
        }
    }
}
