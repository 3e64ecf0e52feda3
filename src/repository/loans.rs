//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookShort,
        loan::{self, CreateLoan, Loan, LoanDetails, LoanStatus},
        member::MemberShort,
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT l.id, l.borrow_date, l.due_date, l.returned_date, l.fee,
           m.id as member_id, m.name as member_name,
           b.id as book_id, b.title as book_title, b.isbn as book_isbn
    FROM loans l
    JOIN members m ON l.member_id = m.id
    JOIN books b ON l.book_id = b.id
"#;

fn details_from_row(row: &PgRow) -> LoanDetails {
    let returned_date: Option<NaiveDate> = row.get("returned_date");
    let status = if returned_date.is_some() {
        LoanStatus::Returned
    } else {
        LoanStatus::Active
    };

    LoanDetails {
        id: row.get("id"),
        member: MemberShort {
            id: row.get("member_id"),
            name: row.get("member_name"),
        },
        book: BookShort {
            id: row.get("book_id"),
            title: row.get("book_title"),
            isbn: row.get("book_isbn"),
        },
        borrow_date: row.get("borrow_date"),
        due_date: row.get("due_date"),
        returned_date,
        fee: row.get("fee"),
        status,
    }
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Create a new loan. Dates are expected to be validated by the caller;
    /// the record starts active with no fee.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (member_id, book_id, borrow_date, due_date, fee)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING *
            "#,
        )
        .bind(loan.member_id)
        .bind(loan.book_id)
        .bind(loan.borrow_date)
        .bind(loan.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Return a loan, computing any overdue fee.
    ///
    /// The row is locked for the duration of the transaction, so concurrent
    /// returns of the same loan serialize: exactly one commits and the other
    /// observes the already-set `returned_date`. The date and fee are written
    /// in a single statement; a partial update is never visible.
    pub async fn return_loan(&self, loan_id: i32, returned_date: NaiveDate) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1 FOR UPDATE")
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if current.returned_date.is_some() {
            return Err(AppError::AlreadyReturned(format!(
                "Loan {} has already been returned",
                loan_id
            )));
        }

        if returned_date < current.borrow_date {
            return Err(AppError::InvalidReturnDate(
                "Return date cannot be before the borrow date".to_string(),
            ));
        }

        let fee = loan::overdue_fee(current.due_date, returned_date);

        let updated = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET returned_date = $1, fee = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(returned_date)
        .bind(fee)
        .bind(loan_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// List every loan, returned or not, in insertion order
    pub async fn list_all(&self) -> AppResult<Vec<LoanDetails>> {
        let sql = format!("{} ORDER BY l.id", DETAILS_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(details_from_row).collect())
    }

    /// List loans that have not been returned yet
    pub async fn list_current(&self) -> AppResult<Vec<LoanDetails>> {
        let sql = format!("{} WHERE l.returned_date IS NULL ORDER BY l.id", DETAILS_SELECT);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(details_from_row).collect())
    }

    /// List loans for one member
    pub async fn list_by_member(&self, member_id: i32) -> AppResult<Vec<LoanDetails>> {
        let sql = format!("{} WHERE l.member_id = $1 ORDER BY l.id", DETAILS_SELECT);
        let rows = sqlx::query(&sql).bind(member_id).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(details_from_row).collect())
    }
}
