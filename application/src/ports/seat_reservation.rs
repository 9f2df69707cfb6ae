//! Seat reservation port
//!
//! Defines the interface to the external seat booking service.

use tickets_domain::AccountId;

/// Port for reserving seats against a customer's account.
///
/// Like [`PaymentPort`](super::payment::PaymentPort) this is fire-and-forget
/// from the caller's point of view.
pub trait SeatReservationPort: Send + Sync {
    /// Reserve `seat_count` seats for `account_id`. Infants are never counted.
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64);
}
