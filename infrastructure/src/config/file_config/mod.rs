//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod output;
mod pricing;
mod rules;

pub use audit::FileAuditConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use pricing::FilePricingConfig;
pub use rules::FileRulesConfig;

use serde::{Deserialize, Serialize};
use tickets_domain::{ConfigIssue, PurchaseRules};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Unit prices per ticket category
    pub pricing: FilePricingConfig,
    /// Quota and supervision limits
    pub rules: FileRulesConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Purchase audit log settings
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Build the domain rule set from the `[pricing]` and `[rules]` sections.
    pub fn to_purchase_rules(&self) -> PurchaseRules {
        PurchaseRules::default()
            .with_prices(self.pricing.to_price_table())
            .with_max_tickets(self.rules.max_tickets)
            .with_min_supervising_adults(self.rules.min_supervising_adults)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_purchase_rules().validate()
    }
}
