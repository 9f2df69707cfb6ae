//! Configuration file loading for cinema-tickets
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TICKETS_*` environment variables (e.g. `TICKETS_RULES__MAX_TICKETS=30`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tickets.toml` or `./.tickets.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cinema-tickets/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileOutputConfig, FileOutputFormat, FilePricingConfig,
    FileRulesConfig,
};
pub use loader::ConfigLoader;
