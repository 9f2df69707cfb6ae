//! Logging infrastructure: structured purchase audit logging.
//!
//! Provides [`JsonlPurchaseLogger`], a JSONL file writer that implements
//! the [`PurchaseLogger`](tickets_application::PurchaseLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlPurchaseLogger;
