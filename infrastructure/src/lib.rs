//! Infrastructure layer for cinema-tickets
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod collaborators;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use collaborators::{TracingPaymentGateway, TracingSeatReservation};
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FilePricingConfig, FileRulesConfig,
};
pub use logging::JsonlPurchaseLogger;
