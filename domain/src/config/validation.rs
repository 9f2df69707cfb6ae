//! Configuration issue reporting for purchase rule sets.
//!
//! Issues are structured so that callers can decide what to do with them:
//! the binary aborts on [`Severity::Error`] and prints warnings.

use crate::ticket::TicketCategory;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration must not be used.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The ticket quota is zero.
    ZeroTicketQuota,
    /// Fewer than two supervising adults are required.
    RelaxedSupervision { min_adults: u64 },
    /// A unit price is implausibly high.
    PriceAboveCeiling { category: TicketCategory, price: u64 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}
