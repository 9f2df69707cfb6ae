//! Purchase validation: request shape, aggregation and business rules.
//!
//! Pure domain logic with no I/O. The application layer runs
//! [`PurchaseValidator::validate`] and only talks to payment and seat
//! reservation when it returns a [`ValidatedPurchase`].
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. account id present and positive
//! 2. at least one line, no missing line, every count positive
//! 3. supervision: minors need `min_supervising_adults` adults
//! 4. quota: total tickets at most `max_tickets`
//! 5. lap: no more infants than adults
//!
//! # Examples
//!
//! ```
//! use tickets_domain::{PurchaseRequest, PurchaseValidator, TicketCategory};
//!
//! let validator = PurchaseValidator::default();
//! let request = PurchaseRequest::default()
//!     .with_line(TicketCategory::Adult, 2)
//!     .with_line(TicketCategory::Child, 1);
//! let request = PurchaseRequest { account_id: Some(1), ..request };
//!
//! let purchase = validator.validate(&request).unwrap();
//! assert_eq!(purchase.amount(), 65);
//! assert_eq!(purchase.seats(), 3);
//! ```

use super::rules::PurchaseRules;
use super::summary::PurchaseSummary;
use crate::core::account::AccountId;
use crate::core::error::{RequestIssue, ValidationError};
use crate::ticket::{PurchaseRequest, TicketCategory, TicketRequestLine};
use serde::{Deserialize, Serialize};

/// A purchase that passed every check and may be paid for and seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPurchase {
    pub account_id: AccountId,
    pub summary: PurchaseSummary,
}

impl ValidatedPurchase {
    /// Amount to charge.
    pub fn amount(&self) -> u64 {
        self.summary.total_price
    }

    /// Seats to reserve (infants excluded).
    pub fn seats(&self) -> u64 {
        self.summary.total_seats
    }
}

/// Validates purchase requests against a fixed set of [`PurchaseRules`].
///
/// Holds no per-call state; the same validator may be reused for any number
/// of requests and returns identical results for identical inputs.
#[derive(Debug, Clone, Default)]
pub struct PurchaseValidator {
    rules: PurchaseRules,
}

impl PurchaseValidator {
    pub fn new(rules: PurchaseRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Validate a raw request and compute its totals.
    pub fn validate(&self, request: &PurchaseRequest) -> Result<ValidatedPurchase, ValidationError> {
        let account_id = AccountId::validate(request.account_id)?;
        let counts = Self::check_shape(request.lines.as_deref())?;
        let summary = PurchaseSummary::from_counts(counts, &self.rules.prices);
        self.check_rules(&summary)?;

        Ok(ValidatedPurchase {
            account_id,
            summary,
        })
    }

    /// Validate a request whose account id and lines are all present.
    pub fn validate_lines(
        &self,
        account_id: i64,
        lines: &[TicketRequestLine],
    ) -> Result<ValidatedPurchase, ValidationError> {
        self.validate(&PurchaseRequest::new(account_id, lines.iter().copied()))
    }

    fn check_shape(
        lines: Option<&[Option<TicketRequestLine>]>,
    ) -> Result<Vec<(TicketCategory, u64)>, ValidationError> {
        let lines = match lines {
            Some(lines) if !lines.is_empty() => lines,
            _ => return Err(ValidationError::InvalidRequest(RequestIssue::NoLines)),
        };

        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.ok_or(ValidationError::InvalidRequest(
                    RequestIssue::MissingLine { index },
                ))?;
                match u64::try_from(line.count()) {
                    Ok(count) if count > 0 => Ok((line.category(), count)),
                    _ => Err(ValidationError::InvalidRequest(
                        RequestIssue::NonPositiveCount {
                            index,
                            category: line.category(),
                            count: line.count(),
                        },
                    )),
                }
            })
            .collect()
    }

    fn check_rules(&self, summary: &PurchaseSummary) -> Result<(), ValidationError> {
        if summary.has_minors() && summary.adult_count < self.rules.min_supervising_adults {
            return Err(ValidationError::UnsupervisedMinor {
                adults: summary.adult_count,
                required: self.rules.min_supervising_adults,
            });
        }

        if summary.total_tickets > self.rules.max_tickets {
            return Err(ValidationError::QuotaExceeded {
                requested: summary.total_tickets,
                max: self.rules.max_tickets,
            });
        }

        if summary.infant_count > summary.adult_count {
            return Err(ValidationError::TooManyInfants {
                infants: summary.infant_count,
                adults: summary.adult_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketCategory::{Adult, Child, Infant};

    // ==================== Helper ====================

    fn line(category: TicketCategory, count: i32) -> TicketRequestLine {
        TicketRequestLine::new(category, count)
    }

    fn validate(lines: &[TicketRequestLine]) -> Result<ValidatedPurchase, ValidationError> {
        PurchaseValidator::default().validate_lines(1, lines)
    }

    // ==================== Happy path ====================

    #[test]
    fn test_two_adults() {
        let purchase = validate(&[line(Adult, 2)]).unwrap();
        assert_eq!(purchase.account_id.get(), 1);
        assert_eq!(purchase.amount(), 50);
        assert_eq!(purchase.seats(), 2);
    }

    #[test]
    fn test_single_adult_alone_is_allowed() {
        let purchase = validate(&[line(Adult, 1)]).unwrap();
        assert_eq!(purchase.amount(), 25);
        assert_eq!(purchase.seats(), 1);
    }

    #[test]
    fn test_split_lines_are_aggregated() {
        let purchase = validate(&[
            line(Adult, 1),
            line(Adult, 2),
            line(Adult, 3),
            line(Child, 1),
            line(Child, 2),
            line(Child, 3),
            line(Infant, 1),
            line(Infant, 5),
        ])
        .unwrap();
        assert_eq!(purchase.amount(), 240);
        assert_eq!(purchase.seats(), 12);
        assert_eq!(purchase.summary.total_tickets, 18);
    }

    #[test]
    fn test_quota_boundary_is_inclusive() {
        let purchase = validate(&[line(Adult, 25)]).unwrap();
        assert_eq!(purchase.amount(), 625);
        assert_eq!(purchase.seats(), 25);
    }

    #[test]
    fn test_infants_equal_to_adults_is_allowed() {
        let purchase = validate(&[line(Adult, 2), line(Infant, 2)]).unwrap();
        assert_eq!(purchase.amount(), 50);
        assert_eq!(purchase.seats(), 2);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let validator = PurchaseValidator::default();
        let lines = [line(Adult, 3), line(Child, 4), line(Infant, 1)];
        assert_eq!(
            validator.validate_lines(9, &lines),
            validator.validate_lines(9, &lines)
        );
    }

    // ==================== Account ====================

    #[test]
    fn test_account_must_be_positive() {
        let validator = PurchaseValidator::default();
        for account_id in [None, Some(0), Some(-1)] {
            let request = PurchaseRequest {
                account_id,
                lines: Some(vec![Some(line(Adult, 2))]),
            };
            assert_eq!(
                validator.validate(&request),
                Err(ValidationError::InvalidAccount { account_id })
            );
        }
    }

    #[test]
    fn test_account_is_checked_before_lines() {
        let request = PurchaseRequest {
            account_id: Some(0),
            lines: None,
        };
        let err = PurchaseValidator::default().validate(&request).unwrap_err();
        assert_eq!(err.code(), "invalid_account");
    }

    // ==================== Request shape ====================

    #[test]
    fn test_absent_or_empty_lines_are_rejected() {
        let validator = PurchaseValidator::default();
        for lines in [None, Some(vec![])] {
            let request = PurchaseRequest {
                account_id: Some(1),
                lines,
            };
            assert_eq!(
                validator.validate(&request),
                Err(ValidationError::InvalidRequest(RequestIssue::NoLines))
            );
        }
    }

    #[test]
    fn test_missing_line_is_reported_by_index() {
        let request = PurchaseRequest {
            account_id: Some(1),
            lines: Some(vec![Some(line(Adult, 1)), None]),
        };
        assert_eq!(
            PurchaseValidator::default().validate(&request),
            Err(ValidationError::InvalidRequest(RequestIssue::MissingLine {
                index: 1
            }))
        );
    }

    #[test]
    fn test_zero_and_negative_counts_are_rejected() {
        for count in [0, -1, i32::MIN] {
            assert_eq!(
                validate(&[line(Adult, 2), line(Child, count)]),
                Err(ValidationError::InvalidRequest(
                    RequestIssue::NonPositiveCount {
                        index: 1,
                        category: Child,
                        count,
                    }
                ))
            );
        }
    }

    // ==================== Supervision ====================

    #[test]
    fn test_one_adult_with_child_is_unsupervised() {
        assert_eq!(
            validate(&[line(Adult, 1), line(Child, 1)]),
            Err(ValidationError::UnsupervisedMinor {
                adults: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_one_adult_with_infant_is_unsupervised() {
        let err = validate(&[line(Adult, 1), line(Infant, 1)]).unwrap_err();
        assert_eq!(err.code(), "unsupervised_minor");
    }

    #[test]
    fn test_minors_without_adults_are_unsupervised() {
        for lines in [
            vec![line(Child, 2)],
            vec![line(Infant, 7)],
            vec![line(Child, 2), line(Infant, 5)],
        ] {
            let err = validate(&lines).unwrap_err();
            assert_eq!(err.code(), "unsupervised_minor");
        }
    }

    #[test]
    fn test_supervision_threshold_follows_rules() {
        let validator =
            PurchaseValidator::new(PurchaseRules::default().with_min_supervising_adults(3));
        assert_eq!(
            validator.validate_lines(1, &[line(Adult, 2), line(Child, 1)]),
            Err(ValidationError::UnsupervisedMinor {
                adults: 2,
                required: 3
            })
        );
        let purchase = validator
            .validate_lines(1, &[line(Adult, 3), line(Child, 1)])
            .unwrap();
        assert_eq!(purchase.amount(), 90);
    }

    // ==================== Quota ====================

    #[test]
    fn test_twenty_six_adults_exceed_quota() {
        assert_eq!(
            validate(&[line(Adult, 26)]),
            Err(ValidationError::QuotaExceeded {
                requested: 26,
                max: 25
            })
        );
    }

    #[test]
    fn test_infants_count_towards_quota() {
        assert_eq!(
            validate(&[line(Adult, 13), line(Infant, 13)]),
            Err(ValidationError::QuotaExceeded {
                requested: 26,
                max: 25
            })
        );
    }

    #[test]
    fn test_huge_counts_hit_quota_without_overflow() {
        let err = validate(&[line(Adult, i32::MAX), line(Adult, i32::MAX)]).unwrap_err();
        assert_eq!(err.code(), "quota_exceeded");
    }

    // ==================== Lap ====================

    #[test]
    fn test_more_infants_than_adults() {
        assert_eq!(
            validate(&[line(Adult, 2), line(Infant, 3)]),
            Err(ValidationError::TooManyInfants {
                infants: 3,
                adults: 2
            })
        );
    }

    #[test]
    fn test_supervision_is_checked_before_quota() {
        let err = validate(&[line(Adult, 1), line(Child, 30)]).unwrap_err();
        assert_eq!(err.code(), "unsupervised_minor");
    }

    #[test]
    fn test_quota_is_checked_before_lap() {
        let err = validate(&[line(Adult, 2), line(Infant, 24)]).unwrap_err();
        assert_eq!(err.code(), "quota_exceeded");
    }
}
