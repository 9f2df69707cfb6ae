//! CLI command definitions

use crate::cli::ticket_arg::parse_ticket_arg;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tickets_domain::TicketRequestLine;

/// Output format for purchase results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Receipt with a per-category breakdown
    Full,
    /// One line: amount charged and seats reserved
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tickets_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => tickets_domain::OutputFormat::Full,
            OutputFormat::Summary => tickets_domain::OutputFormat::Summary,
            OutputFormat::Json => tickets_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for cinema-tickets
#[derive(Parser, Debug)]
#[command(name = "cinema-tickets")]
#[command(author, version, about = "Validate, price and book a group ticket purchase")]
#[command(long_about = r#"
Validates a group ticket purchase, charges the account and reserves seats.

Default prices: adult 25, child 15, infant 0 (infants sit on an adult's lap).
Override them in the [pricing] config section.

Rules:
1. Child and infant tickets need at least two adult tickets
2. No more tickets in one purchase than [rules] max_tickets (default 25)
3. No more infants than adults

Configuration files are loaded from (in priority order):
1. TICKETS_* environment variables
2. --config <path>     Explicit config file
3. ./tickets.toml      Project-level config
4. ~/.config/cinema-tickets/config.toml   Global config

Example:
  cinema-tickets --account 1 --ticket adult=2 --ticket child=1
  cinema-tickets --request purchase.json --output json
"#)]
pub struct Cli {
    /// Account id of the purchasing customer
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    pub account: Option<i64>,

    /// Tickets to buy as CATEGORY=COUNT (can be specified multiple times)
    #[arg(short, long, value_name = "CATEGORY=COUNT", value_parser = parse_ticket_arg)]
    pub ticket: Vec<TicketRequestLine>,

    /// Read the whole purchase request from a JSON file
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["account", "ticket"])]
    pub request: Option<PathBuf>,

    /// Output format (defaults to the configured format, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Append one JSON line per purchase attempt to this file
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
