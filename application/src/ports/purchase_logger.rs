//! Port for structured purchase audit logging.
//!
//! Defines the [`PurchaseLogger`] trait for recording the outcome of every
//! purchase attempt (completed or rejected) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable audit trail (JSONL).

use serde_json::Value;

/// A structured purchase event for logging.
pub struct PurchaseEvent {
    /// Event type identifier (e.g., "purchase_completed", "purchase_rejected").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PurchaseEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging purchase events to a structured log.
///
/// The `log` method is synchronous and non-fallible so that audit problems
/// never change the outcome of a purchase.
pub trait PurchaseLogger: Send + Sync {
    /// Record a purchase event.
    fn log(&self, event: PurchaseEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoPurchaseLogger;

impl PurchaseLogger for NoPurchaseLogger {
    fn log(&self, _event: PurchaseEvent) {}
}
