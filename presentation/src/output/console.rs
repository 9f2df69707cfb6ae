//! Console output formatter for purchase outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use tickets_application::PurchaseReceipt;
use tickets_domain::{OutputFormat, PriceTable, TicketCategory, ValidationError};

/// Formats purchase receipts and rejections for console display
pub struct ConsoleFormatter {
    prices: PriceTable,
}

impl ConsoleFormatter {
    /// `prices` are the unit prices the receipt was computed with.
    pub fn new(prices: PriceTable) -> Self {
        Self { prices }
    }

    /// Render either outcome in the requested format.
    pub fn render(
        &self,
        outcome: &Result<PurchaseReceipt, ValidationError>,
        format: OutputFormat,
    ) -> String {
        match (outcome, format) {
            (Ok(receipt), OutputFormat::Full) => self.format(receipt),
            (Ok(receipt), OutputFormat::Summary) => self.format_summary(receipt),
            (Ok(receipt), OutputFormat::Json) => self.format_json(receipt),
            (Err(error), OutputFormat::Json) => self.format_rejection_json(error),
            (Err(error), _) => self.format_rejection(error),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(44);
        format!("{}\n{:^44}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(44).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, receipt: &PurchaseReceipt) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Ticket Purchase"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n\n",
            "Account:".cyan().bold(),
            receipt.account_id
        ));

        for category in TicketCategory::ALL {
            let count = receipt.summary.count_of(category);
            if count == 0 {
                continue;
            }
            let unit = self.prices.unit_price(category);
            let seats = if category.occupies_seat() {
                format!("{} seat(s)", count)
            } else {
                "lap".to_string()
            };
            output.push_str(&format!(
                "  {:<8} {:>3} x {:>4} = {:>6}   {}\n",
                category.as_str(),
                count,
                unit,
                count.saturating_mul(unit),
                seats.dimmed()
            ));
        }

        output.push_str(&format!("\n{}\n", "-".repeat(44)));
        output.push_str(&format!(
            "{} {}\n",
            "Tickets issued:".bold(),
            receipt.tickets_issued
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Seats reserved:".bold(),
            receipt.seats_reserved
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Amount charged:".green().bold(),
            receipt.amount_charged
        ));
        output.push_str(&Self::footer());

        output
    }

    fn format_json(&self, receipt: &PurchaseReceipt) -> String {
        let value = serde_json::json!({
            "status": "completed",
            "receipt": receipt,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_summary(&self, receipt: &PurchaseReceipt) -> String {
        format!(
            "{} account {}: charged {}, {} seat(s), {} ticket(s)",
            "OK".green().bold(),
            receipt.account_id,
            receipt.amount_charged,
            receipt.seats_reserved,
            receipt.tickets_issued
        )
    }

    fn format_rejection(&self, error: &ValidationError) -> String {
        format!(
            "{} {}\n  {}",
            "Purchase rejected:".red().bold(),
            error.code(),
            error
        )
    }

    fn format_rejection_json(&self, error: &ValidationError) -> String {
        let value = serde_json::json!({
            "status": "rejected",
            "reason": error.code(),
            "message": error.to_string(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickets_domain::{AccountId, PurchaseSummary, RequestIssue};

    fn receipt() -> PurchaseReceipt {
        let prices = PriceTable::default();
        let summary = PurchaseSummary::from_counts(
            [
                (TicketCategory::Adult, 2),
                (TicketCategory::Child, 1),
                (TicketCategory::Infant, 1),
            ],
            &prices,
        );
        PurchaseReceipt {
            account_id: AccountId::try_new(42).unwrap(),
            amount_charged: summary.total_price,
            seats_reserved: summary.total_seats,
            tickets_issued: summary.total_tickets,
            summary,
        }
    }

    fn formatter() -> ConsoleFormatter {
        ConsoleFormatter::new(PriceTable::default())
    }

    #[test]
    fn test_full_receipt_lists_each_category() {
        let output = formatter().format(&receipt());
        assert!(output.contains("adult      2 x   25 =     50"));
        assert!(output.contains("child      1 x   15 =     15"));
        assert!(output.contains("infant     1 x    0 =      0"));
        assert!(output.contains("65"));
    }

    #[test]
    fn test_full_receipt_skips_absent_categories() {
        let mut receipt = receipt();
        receipt.summary.infant_count = 0;
        let output = formatter().format(&receipt);
        assert!(!output.contains("infant"));
    }

    #[test]
    fn test_json_receipt() {
        let output = formatter().format_json(&receipt());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["receipt"]["account_id"], 42);
        assert_eq!(value["receipt"]["amount_charged"], 65);
        assert_eq!(value["receipt"]["seats_reserved"], 3);
        assert_eq!(value["receipt"]["summary"]["infant_count"], 1);
    }

    #[test]
    fn test_rejection_json() {
        let error = ValidationError::InvalidRequest(RequestIssue::MissingLine { index: 3 });
        let output = formatter().render(&Err(error), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["reason"], "invalid_request");
        assert_eq!(value["message"], "Invalid request: line 3 is missing");
    }

    #[test]
    fn test_render_routes_by_format() {
        let f = formatter();
        let ok = Ok(receipt());
        assert!(f.render(&ok, OutputFormat::Summary).contains("charged 65, 3 seat(s), 4 ticket(s)"));
        assert!(f.render(&ok, OutputFormat::Full).contains("Tickets issued:"));

        let rejected = Err(ValidationError::QuotaExceeded {
            requested: 26,
            max: 25,
        });
        let text = f.render(&rejected, OutputFormat::Summary);
        assert!(text.contains("quota_exceeded"));
        assert!(text.contains("Requested 26 tickets, at most 25 may be bought at once"));
    }
}
