//! Application layer for cinema-tickets
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    payment::PaymentPort,
    purchase_logger::{NoPurchaseLogger, PurchaseEvent, PurchaseLogger},
    seat_reservation::SeatReservationPort,
};
pub use use_cases::purchase_tickets::{PurchaseReceipt, PurchaseTicketsUseCase};
