//! Loan ledger endpoints: borrow, return, and listings

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanDetails, LoanStatus},
};

use super::AuthenticatedUser;

/// Borrow request
#[derive(Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Borrowing member ID
    pub member_id: i32,
    /// Book ID
    pub book_id: i32,
    /// Date the loan starts
    pub borrow_date: NaiveDate,
    /// Intended due date, at most 30 days after the borrow date
    pub due_date: NaiveDate,
}

/// Return request
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    /// Actual date the book came back
    pub returned_date: NaiveDate,
}

/// Loan state in API responses
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub fee: i64,
    pub status: LoanStatus,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        let status = loan.status();
        Self {
            id: loan.id,
            member_id: loan.member_id,
            book_id: loan.book_id,
            borrow_date: loan.borrow_date,
            due_date: loan.due_date,
            returned_date: loan.returned_date,
            fee: loan.fee,
            status,
        }
    }
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Invalid loan period"),
        (status = 404, description = "Member or book not found")
    )
)]
pub async fn borrow(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let loan = CreateLoan {
        member_id: request.member_id,
        book_id: request.book_id,
        borrow_date: request.borrow_date,
        due_date: request.due_date,
    };

    let created = state.services.loans.borrow(loan).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Already returned"),
        (status = 422, description = "Return date precedes borrow date")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(loan_id): Path<i32>,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<LoanResponse>> {
    let loan = state
        .services
        .loans
        .return_loan(loan_id, request.returned_date)
        .await?;

    Ok(Json(loan.into()))
}

/// List all loans, active and returned
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All loans", body = Vec<LoanDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.list_all().await?;
    Ok(Json(loans))
}

/// List loans currently out
#[utoipa::path(
    get,
    path = "/loans/current",
    tag = "loans",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active loans", body = Vec<LoanDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_current_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.list_current().await?;
    Ok(Json(loans))
}

/// Get loans for a specific member
#[utoipa::path(
    get,
    path = "/members/{id}/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member's loans", body = Vec<LoanDetails>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(member_id): Path<i32>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.member_loans(member_id).await?;
    Ok(Json(loans))
}
