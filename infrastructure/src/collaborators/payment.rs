//! Payment gateway adapter that records charges through `tracing`.

use tickets_application::PaymentPort;
use tickets_domain::AccountId;
use tracing::info;

/// Accepts every charge and emits it as an `info` event.
#[derive(Debug, Clone, Default)]
pub struct TracingPaymentGateway;

impl TracingPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentPort for TracingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        info!(account_id = account_id.get(), amount, "Payment submitted");
    }
}
