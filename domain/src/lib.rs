//! Domain layer for cinema-tickets
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ticket categories
//!
//! - **Adult**: paid, seated
//! - **Child**: paid at a lower rate, seated, needs adult supervision
//! - **Infant**: free, sits on an adult's lap, needs adult supervision
//!
//! ## Purchase gate
//!
//! [`PurchaseValidator`] turns a raw [`PurchaseRequest`] into a
//! [`ValidatedPurchase`] or a [`ValidationError`]. Nothing downstream
//! (payment, seat reservation) ever sees an unvalidated request.

pub mod config;
pub mod core;
pub mod purchase;
pub mod ticket;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    account::AccountId,
    error::{RequestIssue, ValidationError},
};
pub use purchase::{
    rules::{
        DEFAULT_MAX_TICKETS, DEFAULT_MIN_SUPERVISING_ADULTS, PRICE_SANITY_CEILING, PriceTable,
        PurchaseRules,
    },
    summary::PurchaseSummary,
    validator::{PurchaseValidator, ValidatedPurchase},
};
pub use ticket::{PurchaseRequest, TicketCategory, TicketRequestLine};
