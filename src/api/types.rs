use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::catalog::Availability;
use crate::domain::book::Book;
use crate::domain::commands::{CreateBook, FindAvailability, ReplaceBook, UpdateBookStatus};
use crate::domain::value_objects::BookId;

/// 書籍登録のリクエストボディ（POST /books）
///
/// IDは含まない。ストアが採番する。
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<FixedOffset>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateBookRequest {
    pub fn to_command(self) -> CreateBook {
        CreateBook {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publish_date: self.publish_date,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

/// 全項目更新のリクエストボディ（PUT /books/:id）
#[derive(Debug, Deserialize)]
pub struct ReplaceBookRequest {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<FixedOffset>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl ReplaceBookRequest {
    pub fn to_command(self) -> ReplaceBook {
        ReplaceBook {
            id: BookId::from_uuid(self.id),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publish_date: self.publish_date,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

/// ステータス更新のリクエストボディ（PUT /books/:id/status）
///
/// 未指定は空ステータスとして扱われ、アプリケーション層で拒否される。
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    pub fn to_command(self, id: Uuid) -> UpdateBookStatus {
        UpdateBookStatus {
            id: BookId::from_uuid(id),
            status: self.status.unwrap_or_default(),
        }
    }
}

/// 検索のクエリパラメータ（GET /books/search）
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// タイトルの部分一致パターン
    pub title: Option<String>,
    /// 著者の部分一致パターン
    pub author: Option<String>,
}

/// 貸出可能日照会のクエリパラメータ（GET /books/availability）
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub title1: Option<String>,
    pub title2: Option<String>,
    pub title3: Option<String>,
    /// 対象日（その日のUTC深夜0時として解釈される）
    pub date: NaiveDate,
}

impl AvailabilityQuery {
    pub fn to_command(self) -> FindAvailability {
        FindAvailability {
            titles: vec![
                self.title1.unwrap_or_default(),
                self.title2.unwrap_or_default(),
                self.title3.unwrap_or_default(),
            ],
            date: self
                .date
                .and_time(NaiveTime::MIN)
                .and_utc()
                .fixed_offset(),
        }
    }
}

/// 書籍レスポンス
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<Utc>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            publish_date: book.publish_date,
            status: book.status,
            due_date: book.due_date,
        }
    }
}

/// 貸出可能日照会のレスポンス
///
/// 即時成立と前方走査のどちらの経路でも同じ形で返す。
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub titles: Vec<String>,
    pub effective_date: DateTime<Utc>,
    pub available_books: Vec<AvailableBookResponse>,
}

/// 貸出可能なレコードの要約
#[derive(Debug, Serialize)]
pub struct AvailableBookResponse {
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        Self {
            titles: availability.titles,
            effective_date: availability.effective_date,
            available_books: availability
                .books
                .into_iter()
                .map(|b| AvailableBookResponse {
                    title: b.title,
                    due_date: b.due_date,
                })
                .collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
