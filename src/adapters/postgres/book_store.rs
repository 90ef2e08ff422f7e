use crate::domain::book::{Book, NewBook};
use crate::domain::value_objects::BookId;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        id: BookId::from_uuid(row.get("book_id")),
        title: row.get("title"),
        author: row.get("author"),
        isbn: row.get("isbn"),
        publish_date: row.get("publish_date"),
        status: row.get("status"),
        due_date: row.get("due_date"),
    }
}

/// 更新・削除の対象が存在しなかった場合のエラー
fn not_found(id: BookId) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("book not found: {}", id.value()),
    ))
}

/// BookStoreのPostgreSQL実装
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    /// PostgreSQLコネクションプールから新しいBookStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    /// IDを採番してレコードを保存する
    async fn insert(&self, book: NewBook) -> Result<Book> {
        let id = BookId::new();

        sqlx::query(
            r#"
            INSERT INTO books (
                book_id,
                title,
                author,
                isbn,
                publish_date,
                status,
                due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.value())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.publish_date)
        .bind(&book.status)
        .bind(book.due_date)
        .execute(&self.pool)
        .await?;

        Ok(Book {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            publish_date: book.publish_date,
            status: book.status,
            due_date: book.due_date,
        })
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT book_id, title, author, isbn, publish_date, status, due_date
            FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT book_id, title, author, isbn, publish_date, status, due_date
            FROM books
            ORDER BY title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn update(&self, book: Book) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2,
                author = $3,
                isbn = $4,
                publish_date = $5,
                status = $6,
                due_date = $7
            WHERE book_id = $1
            "#,
        )
        .bind(book.id.value())
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.publish_date)
        .bind(&book.status)
        .bind(book.due_date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(book.id));
        }

        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE book_id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
