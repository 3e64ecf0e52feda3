//! Loan (borrow record) model, state machine, and fee rules

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

use super::book::BookShort;
use super::member::MemberShort;

/// Longest allowed loan period, borrow date to due date inclusive.
pub const MAX_LOAN_DAYS: i64 = 30;

/// Flat overdue penalty per day, in minor currency units.
pub const DAILY_OVERDUE_FEE: i64 = 10;

/// Loan lifecycle status, derived from `returned_date`.
/// A loan transitions exactly once, Active to Returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Returned => "returned",
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loan model from database.
///
/// `due_date` is fixed at borrow time and never overwritten; `returned_date`
/// is NULL until the return operation sets it. A returned loan therefore
/// always carries its actual return date, and the fee invariant
/// (`fee > 0` only when `returned_date > due_date`) stays checkable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub fee: i64,
}

impl Loan {
    pub fn status(&self) -> LoanStatus {
        if self.returned_date.is_some() {
            LoanStatus::Returned
        } else {
            LoanStatus::Active
        }
    }
}

/// Loan with member and book summaries for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    pub id: i32,
    pub member: MemberShort,
    pub book: BookShort,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub fee: i64,
    pub status: LoanStatus,
}

/// Create loan request (borrow operation input)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Validate the borrow/due date pair before a loan is created.
///
/// The due date must fall strictly after the borrow date and at most
/// [`MAX_LOAN_DAYS`] days after it; the cap itself is allowed. Checks run
/// in order and the first failure is reported.
pub fn validate_loan_period(borrow_date: NaiveDate, due_date: NaiveDate) -> AppResult<()> {
    if due_date <= borrow_date {
        return Err(AppError::Validation(
            "Due date must be after the borrow date".to_string(),
        ));
    }
    if due_date - borrow_date > Duration::days(MAX_LOAN_DAYS) {
        return Err(AppError::Validation(format!(
            "Due date cannot be more than {} days after the borrow date",
            MAX_LOAN_DAYS
        )));
    }
    Ok(())
}

/// Compute the overdue fee for a return.
///
/// A return on the due date itself is not overdue; only days strictly past
/// the due date are charged, at [`DAILY_OVERDUE_FEE`] per day.
pub fn overdue_fee(due_date: NaiveDate, returned_date: NaiveDate) -> i64 {
    if returned_date > due_date {
        (returned_date - due_date).num_days() * DAILY_OVERDUE_FEE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_must_be_after_borrow_date() {
        let borrow = date(2024, 1, 1);
        assert!(validate_loan_period(borrow, date(2024, 1, 1)).is_err());
        assert!(validate_loan_period(borrow, date(2023, 12, 31)).is_err());
        assert!(validate_loan_period(borrow, date(2024, 1, 2)).is_ok());
    }

    #[test]
    fn due_date_is_capped_at_thirty_days() {
        let borrow = date(2024, 1, 1);
        // 30 days out is the last permitted due date
        assert!(validate_loan_period(borrow, date(2024, 1, 31)).is_ok());
        assert!(validate_loan_period(borrow, date(2024, 2, 1)).is_err());
    }

    #[test]
    fn return_on_due_date_is_free() {
        let due = date(2024, 1, 15);
        assert_eq!(overdue_fee(due, due), 0);
    }

    #[test]
    fn return_before_due_date_is_free() {
        assert_eq!(overdue_fee(date(2024, 1, 15), date(2024, 1, 10)), 0);
    }

    #[test]
    fn late_returns_charge_ten_per_day() {
        let due = date(2024, 1, 15);
        let cases = [
            (date(2024, 1, 16), 1 * DAILY_OVERDUE_FEE),
            (date(2024, 1, 20), 5 * DAILY_OVERDUE_FEE),
            (date(2024, 2, 14), 30 * DAILY_OVERDUE_FEE),
        ];
        for (returned, expected) in cases {
            assert_eq!(overdue_fee(due, returned), expected, "returned {}", returned);
        }
    }

    #[test]
    fn borrow_and_late_return_scenario() {
        // Borrow on 2024-01-01 due 2024-01-15, return on 2024-01-20: 5 days late.
        let borrow = date(2024, 1, 1);
        let due = date(2024, 1, 15);
        assert!(validate_loan_period(borrow, due).is_ok());
        assert_eq!(overdue_fee(due, date(2024, 1, 20)), 50);
    }

    #[test]
    fn status_derives_from_returned_date() {
        let mut loan = Loan {
            id: 1,
            member_id: 1,
            book_id: 1,
            borrow_date: date(2024, 1, 1),
            due_date: date(2024, 1, 15),
            returned_date: None,
            fee: 0,
        };
        assert_eq!(loan.status(), LoanStatus::Active);

        loan.returned_date = Some(date(2024, 1, 20));
        assert_eq!(loan.status(), LoanStatus::Returned);
    }
}
