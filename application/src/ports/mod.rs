//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod payment;
pub mod purchase_logger;
pub mod seat_reservation;
