//! Seat reservation adapter that records bookings through `tracing`.

use tickets_application::SeatReservationPort;
use tickets_domain::AccountId;
use tracing::info;

/// Accepts every reservation and emits it as an `info` event.
#[derive(Debug, Clone, Default)]
pub struct TracingSeatReservation;

impl TracingSeatReservation {
    pub fn new() -> Self {
        Self
    }
}

impl SeatReservationPort for TracingSeatReservation {
    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) {
        info!(account_id = account_id.get(), seat_count, "Seats reserved");
    }
}
