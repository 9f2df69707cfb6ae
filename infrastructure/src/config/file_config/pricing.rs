//! Pricing configuration from TOML (`[pricing]` section)

use serde::{Deserialize, Serialize};
use tickets_domain::PriceTable;

/// Raw unit prices, whole currency units per ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePricingConfig {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl Default for FilePricingConfig {
    fn default() -> Self {
        let prices = PriceTable::default();
        Self {
            adult: prices.adult,
            child: prices.child,
            infant: prices.infant,
        }
    }
}

impl FilePricingConfig {
    pub fn to_price_table(&self) -> PriceTable {
        PriceTable {
            adult: self.adult,
            child: self.child,
            infant: self.infant,
        }
    }
}
