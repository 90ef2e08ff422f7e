use crate::domain::book::{Book, NewBook};
use crate::domain::value_objects::BookId;
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// 見つからない対象への更新・削除をエラーにするヘルパー
fn not_found(id: BookId) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("book not found: {}", id.value()),
    ))
}

/// BookStoreのインメモリ実装
///
/// テストとローカル実行をデータベースなしで支える。
/// Mutexで直列化されるため、チェックと書き込みの競合はプロセス内では発生しない。
pub struct BookStore {
    books: Mutex<HashMap<BookId, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    /// IDを採番してレコードを保存する
    async fn insert(&self, book: NewBook) -> Result<Book> {
        let stored = Book {
            id: BookId::new(),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            publish_date: book.publish_date,
            status: book.status,
            due_date: book.due_date,
        };

        self.books
            .lock()
            .unwrap()
            .insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.books.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, book: Book) -> Result<()> {
        let mut books = self.books.lock().unwrap();
        if !books.contains_key(&book.id) {
            return Err(not_found(book.id));
        }
        books.insert(book.id, book);
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        match self.books.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}
