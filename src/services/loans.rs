//! Loan ledger service: the borrow/return workflow

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::loan::{self, CreateLoan, Loan, LoanDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book: validate the loan period, then create the record
    pub async fn borrow(&self, request: CreateLoan) -> AppResult<Loan> {
        // Both references must resolve before anything is persisted
        self.repository.members.get_by_id(request.member_id).await?;
        self.repository.books.get_by_id(request.book_id).await?;

        loan::validate_loan_period(request.borrow_date, request.due_date)?;

        self.repository.loans.create(&request).await
    }

    /// Return a borrowed book, charging any overdue fee
    pub async fn return_loan(&self, loan_id: i32, returned_date: NaiveDate) -> AppResult<Loan> {
        self.repository.loans.return_loan(loan_id, returned_date).await
    }

    /// List every loan regardless of state
    pub async fn list_all(&self) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list_all().await
    }

    /// List loans still out
    pub async fn list_current(&self) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list_current().await
    }

    /// List loans for a member
    pub async fn member_loans(&self, member_id: i32) -> AppResult<Vec<LoanDetails>> {
        // Verify member exists
        self.repository.members.get_by_id(member_id).await?;
        self.repository.loans.list_by_member(member_id).await
    }
}
