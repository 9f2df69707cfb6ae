//! Pricing table and purchase limits.

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use crate::ticket::TicketCategory;
use serde::{Deserialize, Serialize};

/// Largest number of tickets (all categories) in one purchase.
pub const DEFAULT_MAX_TICKETS: u64 = 25;

/// Adults required before any child or infant ticket may be bought.
pub const DEFAULT_MIN_SUPERVISING_ADULTS: u64 = 2;

/// Unit prices above this are accepted but reported as suspicious.
pub const PRICE_SANITY_CEILING: u64 = 10_000;

/// Unit price per ticket category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl PriceTable {
    pub fn unit_price(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}

/// Business rules applied to every purchase.
///
/// The defaults are the venue's standing rules; deployments may tune them
/// through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRules {
    pub prices: PriceTable,
    pub max_tickets: u64,
    /// Minimum adult tickets once any minor is present. Never below 2: a
    /// single adult may not bring a child or infant.
    pub min_supervising_adults: u64,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            max_tickets: DEFAULT_MAX_TICKETS,
            min_supervising_adults: DEFAULT_MIN_SUPERVISING_ADULTS,
        }
    }
}

impl PurchaseRules {
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_max_tickets(mut self, max_tickets: u64) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    pub fn with_min_supervising_adults(mut self, adults: u64) -> Self {
        self.min_supervising_adults = adults;
        self
    }

    /// Check the rule set for values that cannot work or look unintended.
    ///
    /// Errors mean the rule set must not be used: no purchase could succeed,
    /// or minors could be booked without two adults. Warnings flag values
    /// that are allowed but look unintended.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_tickets == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTicketQuota,
                message: "rules.max_tickets is 0: every purchase would be rejected".to_string(),
            });
        }

        if self.min_supervising_adults < DEFAULT_MIN_SUPERVISING_ADULTS {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::RelaxedSupervision {
                    min_adults: self.min_supervising_adults,
                },
                message: format!(
                    "rules.min_supervising_adults is {}: minors must not be booked with fewer than {} adults",
                    self.min_supervising_adults, DEFAULT_MIN_SUPERVISING_ADULTS
                ),
            });
        }

        for category in TicketCategory::ALL {
            let price = self.prices.unit_price(category);
            if price > PRICE_SANITY_CEILING {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::PriceAboveCeiling { category, price },
                    message: format!(
                        "pricing.{}: {} exceeds the sanity ceiling of {}",
                        category, price, PRICE_SANITY_CEILING
                    ),
                });
            }
        }

        issues
    }
}
