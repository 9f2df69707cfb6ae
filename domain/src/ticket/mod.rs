//! Ticket request vocabulary: categories and the lines a caller submits.

pub mod category;
pub mod request;

pub use category::TicketCategory;
pub use request::{PurchaseRequest, TicketRequestLine};
