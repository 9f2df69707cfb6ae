//! Purchase pricing and validation.
//!
//! - [`rules::PurchaseRules`] - price table, quota and supervision threshold
//! - [`summary::PurchaseSummary`] - totals derived from one request
//! - [`validator::PurchaseValidator`] - the all-or-nothing gate

pub mod rules;
pub mod summary;
pub mod validator;
