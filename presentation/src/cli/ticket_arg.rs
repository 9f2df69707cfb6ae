//! Parsing of `CATEGORY=COUNT` ticket arguments.
//!
//! Only the syntax is checked here. A zero or negative count parses fine and
//! is left for purchase validation to reject with the line's position.

use thiserror::Error;
use tickets_domain::{TicketCategory, TicketRequestLine};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TicketArgError {
    #[error("expected CATEGORY=COUNT, got '{0}'")]
    MissingSeparator(String),

    #[error("{0}")]
    UnknownCategory(String),

    #[error("'{0}' is not a whole number")]
    InvalidCount(String),
}

/// Parse `adult=2`, `child:1` and similar into a request line.
pub fn parse_ticket_arg(arg: &str) -> Result<TicketRequestLine, TicketArgError> {
    let (category, count) = arg
        .split_once(['=', ':'])
        .ok_or_else(|| TicketArgError::MissingSeparator(arg.to_string()))?;

    let category: TicketCategory = category.parse().map_err(TicketArgError::UnknownCategory)?;
    let count: i32 = count
        .trim()
        .parse()
        .map_err(|_| TicketArgError::InvalidCount(count.trim().to_string()))?;

    Ok(TicketRequestLine::new(category, count))
}
