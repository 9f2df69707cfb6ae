//! Payment port
//!
//! Defines the interface to the external payment processor.

use tickets_domain::AccountId;

/// Port for charging a customer's account.
///
/// The processor succeeds or fails opaquely; nothing is returned to the
/// caller and failures are the adapter's concern.
pub trait PaymentPort: Send + Sync {
    /// Charge `amount` whole currency units to `account_id`.
    fn make_payment(&self, account_id: AccountId, amount: u64);
}
