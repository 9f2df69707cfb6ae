//! Domain error types

use crate::ticket::TicketCategory;
use thiserror::Error;

/// Why the shape of a purchase request was rejected.
///
/// Line indices are zero-based positions in the caller's ordered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestIssue {
    /// The request carried no ticket lines at all (absent or empty).
    NoLines,
    /// A line slot was present in the sequence but held no value.
    MissingLine { index: usize },
    /// A line asked for zero or a negative number of tickets.
    NonPositiveCount {
        index: usize,
        category: TicketCategory,
        count: i32,
    },
}

impl std::fmt::Display for RequestIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestIssue::NoLines => write!(f, "no ticket lines requested"),
            RequestIssue::MissingLine { index } => write!(f, "line {} is missing", index),
            RequestIssue::NonPositiveCount {
                index,
                category,
                count,
            } => write!(
                f,
                "line {} requests {} {} tickets, count must be positive",
                index, count, category
            ),
        }
    }
}

/// Reasons a purchase attempt is refused before any collaborator is called.
///
/// Every variant is terminal for the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid account id: {}", .account_id.map_or_else(|| "missing".to_string(), |id| id.to_string()))]
    InvalidAccount { account_id: Option<i64> },

    #[error("Invalid request: {0}")]
    InvalidRequest(RequestIssue),

    #[error("Child and infant tickets need at least {required} adult tickets, got {adults}")]
    UnsupervisedMinor { adults: u64, required: u64 },

    #[error("Requested {requested} tickets, at most {max} may be bought at once")]
    QuotaExceeded { requested: u64, max: u64 },

    #[error("{infants} infant tickets but only {adults} adult laps")]
    TooManyInfants { infants: u64, adults: u64 },
}

impl ValidationError {
    /// Stable machine-readable identifier for this cause.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAccount { .. } => "invalid_account",
            ValidationError::InvalidRequest(_) => "invalid_request",
            ValidationError::UnsupervisedMinor { .. } => "unsupervised_minor",
            ValidationError::QuotaExceeded { .. } => "quota_exceeded",
            ValidationError::TooManyInfants { .. } => "too_many_infants",
        }
    }
}
