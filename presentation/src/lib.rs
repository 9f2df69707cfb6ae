//! Presentation layer for cinema-tickets
//!
//! This crate contains CLI definitions, request input parsing,
//! and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use cli::request_file::{RequestFileError, load_request_file};
pub use cli::ticket_arg::{TicketArgError, parse_ticket_arg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
