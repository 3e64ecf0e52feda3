//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDetail, BookQuery, CreateBook, UpdateBook, UpsertBookDetail},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Check if ISBN already exists
    pub async fn isbn_exists(&self, isbn: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1 AND id != $2)",
            )
            .bind(isbn)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Search books with pagination
    pub async fn search(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(ref title) = query.title {
            params.push(format!("%{}%", title.to_lowercase()));
            conditions.push(format!("LOWER(title) LIKE ${}", params.len()));
        }
        if let Some(ref genre) = query.genre {
            params.push(format!("%{}%", genre.to_lowercase()));
            conditions.push(format!("LOWER(genre) LIKE ${}", params.len()));
        }
        if let Some(ref isbn) = query.isbn {
            params.push(isbn.clone());
            conditions.push(format!("isbn = ${}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM books{}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for param in &params {
            count_query = count_query.bind(param);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let list_sql = format!(
            "SELECT * FROM books{} ORDER BY id LIMIT ${} OFFSET ${}",
            where_clause,
            params.len() + 1,
            params.len() + 2
        );
        let mut list_query = sqlx::query_as::<_, Book>(&list_sql);
        for param in &params {
            list_query = list_query.bind(param);
        }
        let books = list_query.bind(per_page).bind(offset).fetch_all(&self.pool).await?;

        Ok((books, total))
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, isbn, published_date, genre)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.published_date)
        .bind(&book.genre)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, update: &UpdateBook) -> AppResult<Book> {
        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($1, title),
                isbn = COALESCE($2, isbn),
                published_date = COALESCE($3, published_date),
                genre = COALESCE($4, genre)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&update.title)
        .bind(&update.isbn)
        .bind(update.published_date)
        .bind(&update.genre)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        Ok(updated)
    }

    /// Delete a book (details cascade in the schema)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Get the detail record for a book
    pub async fn get_detail(&self, book_id: i32) -> AppResult<BookDetail> {
        sqlx::query_as::<_, BookDetail>("SELECT * FROM book_details WHERE book_id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No details recorded for book {}", book_id))
            })
    }

    /// Create or replace the detail record for a book
    pub async fn upsert_detail(
        &self,
        book_id: i32,
        detail: &UpsertBookDetail,
    ) -> AppResult<BookDetail> {
        let stored = sqlx::query_as::<_, BookDetail>(
            r#"
            INSERT INTO book_details (book_id, page_count, publisher, language)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (book_id) DO UPDATE
            SET page_count = EXCLUDED.page_count,
                publisher = EXCLUDED.publisher,
                language = EXCLUDED.language
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(detail.page_count)
        .bind(&detail.publisher)
        .bind(&detail.language)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Delete the detail record for a book
    pub async fn delete_detail(&self, book_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_details WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "No details recorded for book {}",
                book_id
            )));
        }
        Ok(())
    }
}
