//! Core domain concepts shared across all subdomains.
//!
//! - [`account::AccountId`] - validated identity of the purchasing customer
//! - [`error::ValidationError`] - discriminated purchase rejection causes

pub mod account;
pub mod error;
