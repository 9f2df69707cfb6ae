//! Purchase rule configuration from TOML (`[rules]` section)

use serde::{Deserialize, Serialize};
use tickets_domain::{DEFAULT_MAX_TICKETS, DEFAULT_MIN_SUPERVISING_ADULTS};

/// Raw purchase limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRulesConfig {
    /// Maximum tickets (all categories) per purchase
    pub max_tickets: u64,
    /// Adults required once any child or infant is included
    pub min_supervising_adults: u64,
}

impl Default for FileRulesConfig {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            min_supervising_adults: DEFAULT_MIN_SUPERVISING_ADULTS,
        }
    }
}
