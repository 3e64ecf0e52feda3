//! Book and book-detail models and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub isbn: String,
    pub published_date: NaiveDate,
    pub genre: String,
}

/// Short book representation embedded in loan listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
    pub isbn: String,
}

/// One-to-one extension record with physical/publishing metadata.
/// Lives and dies with its book (cascade delete in the schema).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookDetail {
    pub id: i32,
    pub book_id: i32,
    pub page_count: i32,
    pub publisher: String,
    pub language: String,
}

/// Book query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(equal = 13, message = "ISBN must be exactly 13 characters"))]
    pub isbn: String,
    pub published_date: NaiveDate,
    #[validate(length(min = 1, max = 100, message = "Genre must be 1-100 characters"))]
    pub genre: String,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[validate(length(equal = 13, message = "ISBN must be exactly 13 characters"))]
    pub isbn: Option<String>,
    pub published_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 100, message = "Genre must be 1-100 characters"))]
    pub genre: Option<String>,
}

/// Upsert book detail request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertBookDetail {
    #[validate(range(min = 1, message = "Page count must be positive"))]
    pub page_count: i32,
    #[validate(length(min = 1, max = 100, message = "Publisher must be 1-100 characters"))]
    pub publisher: String,
    #[validate(length(min = 1, max = 100, message = "Language must be 1-100 characters"))]
    pub language: String,
}
