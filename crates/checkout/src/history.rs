//! Append-only order history.

use catalog::{Catalog, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// One archived item from a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedItem {
    /// The product that was ordered.
    pub product_id: ProductId,

    /// When the item was archived.
    pub archived_at: DateTime<Utc>,
}

/// Append-only archive of every item ever ordered in a session.
///
/// Conceptually a stack: one push per item, in cart order, across all
/// orders ever placed — the last item of the last-archived order is the
/// top. Entries are never removed, so the count only grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderHistory {
    entries: Vec<ArchivedItem>,
}

/// Most-recent line plus total count, resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Rendered description of the most recently ordered item.
    pub most_recent: String,

    /// Total items ever ordered.
    pub total_items: usize,
}

impl OrderHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives each item of a completed order, preserving cart order.
    ///
    /// The last item pushed becomes the new top.
    pub fn archive(&mut self, items: impl IntoIterator<Item = ProductId>) {
        let archived_at = Utc::now();
        for product_id in items {
            self.entries.push(ArchivedItem {
                product_id,
                archived_at,
            });
        }
        tracing::debug!(total = self.entries.len(), "order archived");
    }

    /// Returns the most recently archived item.
    pub fn most_recent(&self) -> Result<&ArchivedItem, CheckoutError> {
        self.entries.last().ok_or(CheckoutError::EmptyHistory)
    }

    /// Total items ever archived.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been archived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[ArchivedItem] {
        &self.entries
    }

    /// Resolves the most-recent entry against the catalog for display.
    ///
    /// The entry holds a reference, not a copy, so the description
    /// reflects the product's current price.
    pub fn summary(&self, catalog: &Catalog) -> Result<HistorySummary, CheckoutError> {
        let top = self.most_recent()?;
        let product = catalog.product(top.product_id)?;
        Ok(HistorySummary {
            most_recent: product.to_string(),
            total_items: self.entries.len(),
        })
    }
}
