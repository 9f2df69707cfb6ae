//! Purchase Tickets use case.
//!
//! Validates a purchase request and, only if every check passes, charges the
//! account and reserves the seats.
//!
//! The flow is a single pass with no state between calls:
//! 1. Run [`PurchaseValidator`] (account, request shape, rules)
//! 2. [`PaymentPort::make_payment`] with the total price
//! 3. [`SeatReservationPort::reserve_seat`] with the seat count
//!
//! A rejection at step 1 means neither collaborator is touched. Steps 2 and 3
//! are fire-and-forget; nothing is rolled back.

use crate::ports::payment::PaymentPort;
use crate::ports::purchase_logger::{NoPurchaseLogger, PurchaseEvent, PurchaseLogger};
use crate::ports::seat_reservation::SeatReservationPort;
use serde::Serialize;
use std::sync::Arc;
use tickets_domain::{
    AccountId, PurchaseRequest, PurchaseRules, PurchaseSummary, PurchaseValidator,
    TicketRequestLine, ValidatedPurchase, ValidationError,
};
use tracing::{debug, info, warn};

/// Outcome of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub account_id: AccountId,
    pub amount_charged: u64,
    pub seats_reserved: u64,
    pub tickets_issued: u64,
    pub summary: PurchaseSummary,
}

impl From<ValidatedPurchase> for PurchaseReceipt {
    fn from(purchase: ValidatedPurchase) -> Self {
        Self {
            account_id: purchase.account_id,
            amount_charged: purchase.amount(),
            seats_reserved: purchase.seats(),
            tickets_issued: purchase.summary.total_tickets,
            summary: purchase.summary,
        }
    }
}

/// Use case for buying a group of tickets.
pub struct PurchaseTicketsUseCase {
    validator: PurchaseValidator,
    payment: Arc<dyn PaymentPort>,
    seat_reservation: Arc<dyn SeatReservationPort>,
    purchase_logger: Arc<dyn PurchaseLogger>,
}

impl Clone for PurchaseTicketsUseCase {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            payment: self.payment.clone(),
            seat_reservation: self.seat_reservation.clone(),
            purchase_logger: self.purchase_logger.clone(),
        }
    }
}

impl PurchaseTicketsUseCase {
    /// Create with the venue's standing rules.
    pub fn new(
        payment: Arc<dyn PaymentPort>,
        seat_reservation: Arc<dyn SeatReservationPort>,
    ) -> Self {
        Self {
            validator: PurchaseValidator::default(),
            payment,
            seat_reservation,
            purchase_logger: Arc::new(NoPurchaseLogger),
        }
    }

    /// Replace the rule set.
    pub fn with_rules(mut self, rules: PurchaseRules) -> Self {
        self.validator = PurchaseValidator::new(rules);
        self
    }

    /// Create with a purchase audit logger.
    pub fn with_purchase_logger(mut self, logger: Arc<dyn PurchaseLogger>) -> Self {
        self.purchase_logger = logger;
        self
    }

    pub fn rules(&self) -> &PurchaseRules {
        self.validator.rules()
    }

    /// Buy tickets for an account from fully-present lines.
    pub fn purchase(
        &self,
        account_id: i64,
        lines: &[TicketRequestLine],
    ) -> Result<PurchaseReceipt, ValidationError> {
        self.execute(&PurchaseRequest::new(account_id, lines.iter().copied()))
    }

    /// Validate `request`, then pay and reserve.
    pub fn execute(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt, ValidationError> {
        debug!(
            "Purchase attempt: account {:?}, {} line(s)",
            request.account_id,
            request.lines.as_ref().map_or(0, Vec::len)
        );

        let purchase = match self.validator.validate(request) {
            Ok(purchase) => purchase,
            Err(e) => {
                warn!("Purchase rejected ({}): {}", e.code(), e);
                self.purchase_logger.log(PurchaseEvent::new(
                    "purchase_rejected",
                    serde_json::json!({
                        "account_id": request.account_id,
                        "reason": e.code(),
                        "message": e.to_string(),
                    }),
                ));
                return Err(e);
            }
        };

        let account_id = purchase.account_id;

        debug!("Charging account {}: {}", account_id, purchase.amount());
        self.payment.make_payment(account_id, purchase.amount());

        debug!("Reserving {} seat(s) for account {}", purchase.seats(), account_id);
        self.seat_reservation
            .reserve_seat(account_id, purchase.seats());

        let receipt = PurchaseReceipt::from(purchase);

        info!(
            "Purchase completed for account {}: {} ticket(s), {} seat(s), total {}",
            account_id, receipt.tickets_issued, receipt.seats_reserved, receipt.amount_charged
        );
        self.purchase_logger.log(PurchaseEvent::new(
            "purchase_completed",
            completion_payload(&receipt),
        ));

        Ok(receipt)
    }
}

/// Audit payload for a completed purchase; plain numbers only.
fn completion_payload(receipt: &PurchaseReceipt) -> serde_json::Value {
    let summary = &receipt.summary;
    serde_json::json!({
        "account_id": receipt.account_id.get(),
        "amount_charged": receipt.amount_charged,
        "seats_reserved": receipt.seats_reserved,
        "tickets_issued": receipt.tickets_issued,
        "summary": {
            "total_price": summary.total_price,
            "total_seats": summary.total_seats,
            "total_tickets": summary.total_tickets,
            "adult_count": summary.adult_count,
            "child_count": summary.child_count,
            "infant_count": summary.infant_count,
        },
    })
}
