use crate::application::catalog::CatalogError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 409 Conflict - カタログ全体の全単射不変条件の違反
            CatalogError::IsbnConflict => (
                StatusCode::CONFLICT,
                "ISBN_CONFLICT",
                "A book with the same ISBN already exists with different title, author, or publish date".to_string(),
            ),
            CatalogError::DuplicateBook => (
                StatusCode::CONFLICT,
                "DUPLICATE_BOOK",
                "A book with the same title, author, and publish date already exists with a different ISBN".to_string(),
            ),

            // 400 Bad Request - 呼び出し側の入力誤り
            CatalogError::IdMismatch => (
                StatusCode::BAD_REQUEST,
                "ID_MISMATCH",
                "ID in path and ID in body do not match".to_string(),
            ),
            CatalogError::MissingStatus => (
                StatusCode::BAD_REQUEST,
                "MISSING_STATUS",
                "Status is required".to_string(),
            ),
            CatalogError::NoTitlesProvided => (
                StatusCode::BAD_REQUEST,
                "NO_TITLES_PROVIDED",
                "No valid titles provided".to_string(),
            ),

            // 404 Not Found - 対象が存在しない、または条件を満たす日がない
            CatalogError::BookNotFound => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                "Book not found".to_string(),
            ),
            CatalogError::NoAvailabilityFound => (
                StatusCode::NOT_FOUND,
                "NO_AVAILABILITY_FOUND",
                "No availability found within the next year".to_string(),
            ),

            // 500 Internal Server Error - ストア障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CatalogError::StoreError(ref e) => {
                tracing::error!("Book store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Book store error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
