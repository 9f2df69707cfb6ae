//! Output formatter trait

use tickets_application::PurchaseReceipt;
use tickets_domain::ValidationError;

/// Trait for formatting purchase outcomes
pub trait OutputFormatter {
    /// Format the complete receipt
    fn format(&self, receipt: &PurchaseReceipt) -> String;

    /// Format as JSON
    fn format_json(&self, receipt: &PurchaseReceipt) -> String;

    /// Format a one-line summary
    fn format_summary(&self, receipt: &PurchaseReceipt) -> String;

    /// Format a rejected purchase
    fn format_rejection(&self, error: &ValidationError) -> String;

    /// Format a rejected purchase as JSON
    fn format_rejection_json(&self, error: &ValidationError) -> String;
}
