//! Ticket category value object

use serde::{Deserialize, Serialize};

/// Ticket classification.
///
/// Closed set: every price and seat lookup matches on it exhaustively, so a
/// new category cannot be added without deciding both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// All categories in display order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Whether a ticket of this category is allocated a seat.
    ///
    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        match self {
            TicketCategory::Adult | TicketCategory::Child => true,
            TicketCategory::Infant => false,
        }
    }

    /// Whether this category needs adult supervision.
    pub fn is_minor(&self) -> bool {
        match self {
            TicketCategory::Adult => false,
            TicketCategory::Child | TicketCategory::Infant => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Infant => "infant",
        }
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adult" | "adults" => Ok(TicketCategory::Adult),
            "child" | "children" => Ok(TicketCategory::Child),
            "infant" | "infants" => Ok(TicketCategory::Infant),
            other => Err(format!(
                "Unknown ticket category: {}. Valid: adult, child, infant",
                other
            )),
        }
    }
}
