//! Application use cases

pub mod purchase_tickets;
