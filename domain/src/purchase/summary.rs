//! Aggregated totals for one purchase attempt.

use super::rules::PriceTable;
use crate::ticket::TicketCategory;
use serde::{Deserialize, Serialize};

/// Totals derived from a request's lines.
///
/// Aggregation is commutative, so line order never changes the result.
/// Sums saturate instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub total_price: u64,
    pub total_seats: u64,
    pub total_tickets: u64,
    pub adult_count: u64,
    pub child_count: u64,
    pub infant_count: u64,
}

impl PurchaseSummary {
    /// Tally `(category, count)` pairs against a price table.
    pub fn from_counts(
        counts: impl IntoIterator<Item = (TicketCategory, u64)>,
        prices: &PriceTable,
    ) -> Self {
        counts
            .into_iter()
            .fold(Self::default(), |mut summary, (category, count)| {
                summary.add(category, count, prices);
                summary
            })
    }

    /// Add `count` tickets of `category`.
    pub fn add(&mut self, category: TicketCategory, count: u64, prices: &PriceTable) {
        self.total_tickets = self.total_tickets.saturating_add(count);
        self.total_price = self
            .total_price
            .saturating_add(count.saturating_mul(prices.unit_price(category)));
        if category.occupies_seat() {
            self.total_seats = self.total_seats.saturating_add(count);
        }

        let bucket = match category {
            TicketCategory::Adult => &mut self.adult_count,
            TicketCategory::Child => &mut self.child_count,
            TicketCategory::Infant => &mut self.infant_count,
        };
        *bucket = bucket.saturating_add(count);
    }

    pub fn count_of(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult_count,
            TicketCategory::Child => self.child_count,
            TicketCategory::Infant => self.infant_count,
        }
    }

    /// Whether any child or infant ticket is included.
    pub fn has_minors(&self) -> bool {
        self.child_count > 0 || self.infant_count > 0
    }
}
