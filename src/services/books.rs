//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDetail, BookQuery, CreateBook, UpdateBook, UpsertBookDetail},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search books with pagination
    pub async fn search(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.search(query).await
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book
    pub async fn create(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.books.isbn_exists(&book.isbn, None).await? {
            return Err(AppError::Conflict("ISBN already in catalog".to_string()));
        }

        self.repository.books.create(&book).await
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, update: UpdateBook) -> AppResult<Book> {
        update
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(ref isbn) = update.isbn {
            if self.repository.books.isbn_exists(isbn, Some(id)).await? {
                return Err(AppError::Conflict("ISBN already in catalog".to_string()));
            }
        }

        self.repository.books.update(id, &update).await
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    /// Get the detail record for a book
    pub async fn get_detail(&self, book_id: i32) -> AppResult<BookDetail> {
        // Distinguish "no such book" from "book without details"
        self.repository.books.get_by_id(book_id).await?;
        self.repository.books.get_detail(book_id).await
    }

    /// Create or replace the detail record for a book
    pub async fn upsert_detail(
        &self,
        book_id: i32,
        detail: UpsertBookDetail,
    ) -> AppResult<BookDetail> {
        detail
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.get_by_id(book_id).await?;
        self.repository.books.upsert_detail(book_id, &detail).await
    }

    /// Delete the detail record for a book
    pub async fn delete_detail(&self, book_id: i32) -> AppResult<()> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository.books.delete_detail(book_id).await
    }
}
