//! Inbound purchase request shapes.

use super::category::TicketCategory;
use serde::{Deserialize, Serialize};

/// A number of tickets of one category (Value Object)
///
/// The count is kept exactly as the caller supplied it; positivity is a
/// validation concern, not a construction one, so that a bad line can be
/// reported by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequestLine {
    category: TicketCategory,
    count: i32,
}

impl TicketRequestLine {
    pub fn new(category: TicketCategory, count: i32) -> Self {
        Self { category, count }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}

/// A purchase attempt as received from a caller.
///
/// Both fields are optional, and each line slot is optional, so that a JSON
/// document with `null` in any of these places deserializes and is rejected
/// by validation rather than by the parser.
///
/// ```
/// use tickets_domain::{PurchaseRequest, TicketCategory, TicketRequestLine};
///
/// let request: PurchaseRequest = serde_json::from_str(
///     r#"{"account_id": 7, "lines": [{"category": "adult", "count": 2}, null]}"#,
/// ).unwrap();
/// assert_eq!(request.account_id, Some(7));
/// assert_eq!(
///     request.lines,
///     Some(vec![Some(TicketRequestLine::new(TicketCategory::Adult, 2)), None])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseRequest {
    pub account_id: Option<i64>,
    pub lines: Option<Vec<Option<TicketRequestLine>>>,
}

impl PurchaseRequest {
    /// Build a request with every value present.
    pub fn new(account_id: i64, lines: impl IntoIterator<Item = TicketRequestLine>) -> Self {
        Self {
            account_id: Some(account_id),
            lines: Some(lines.into_iter().map(Some).collect()),
        }
    }

    /// Append a line (builder style).
    pub fn with_line(mut self, category: TicketCategory, count: i32) -> Self {
        self.lines
            .get_or_insert_with(Vec::new)
            .push(Some(TicketRequestLine::new(category, count)));
        self
    }
}
