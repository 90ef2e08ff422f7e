use thiserror::Error;

use crate::domain::errors::{IdentityConflict, StatusUpdateError};

/// カタログアプリケーション層のエラー
///
/// すべて各操作の境界で回復され、コア内部でのリトライは行わない。
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 同じISBNの書籍が異なるタイトル・著者・出版日で既に存在する
    #[error("A book with the same ISBN already exists with different title, author, or publish date")]
    IsbnConflict,

    /// 同じタイトル・著者・出版日の書籍が異なるISBNで既に存在する
    #[error("A book with the same title, author, and publish date already exists with a different ISBN")]
    DuplicateBook,

    /// パスのIDとボディのIDが一致しない
    #[error("ID in path and ID in body do not match")]
    IdMismatch,

    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// ステータスが指定されていない
    #[error("Status is required")]
    MissingStatus,

    /// 有効なタイトルが1件も指定されていない
    #[error("No valid titles provided")]
    NoTitlesProvided,

    /// 1年以内に貸出可能日が見つからない
    #[error("No availability found within the next year")]
    NoAvailabilityFound,

    /// ストアのエラー（そのまま呼び出し元へ伝播。コアはリトライしない）
    #[error("Book store error")]
    StoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<IdentityConflict> for CatalogError {
    fn from(conflict: IdentityConflict) -> Self {
        match conflict {
            IdentityConflict::Isbn => CatalogError::IsbnConflict,
            IdentityConflict::DuplicateBook => CatalogError::DuplicateBook,
        }
    }
}

impl From<StatusUpdateError> for CatalogError {
    fn from(err: StatusUpdateError) -> Self {
        match err {
            StatusUpdateError::MissingStatus => CatalogError::MissingStatus,
        }
    }
}

/// アプリケーション層のResult型
pub type Result<T> = std::result::Result<T, CatalogError>;
