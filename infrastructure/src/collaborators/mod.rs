//! Stand-in adapters for the external payment and seat booking services.
//!
//! The real processors live outside this system. These adapters accept the
//! call, trace it, and return, which is enough to run the binary end to end
//! and to see exactly what would have been sent.

mod payment;
mod seat_reservation;

pub use payment::TracingPaymentGateway;
pub use seat_reservation::TracingSeatReservation;
