use crate::application::catalog::{
    ServiceDependencies, create_book as execute_create_book, delete_book as execute_delete_book,
    find_availability as execute_find_availability, list_books as execute_list_books,
    replace_book as execute_replace_book, search_books as execute_search_books,
    update_book_status as execute_update_book_status,
};
use crate::domain::value_objects::BookId;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        AvailabilityQuery, AvailabilityResponse, BookResponse, CreateBookRequest,
        ReplaceBookRequest, SearchQuery, UpdateStatusRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (書き込み)
// ============================================================================

/// POST /books - 書籍を登録
///
/// 強制されるビジネスルール:
/// - ISBN↔(タイトル, 著者, 出版日) の全単射が崩れないこと
/// - statusが"borrowed"で返却期限未指定なら登録時刻 + 7日を導出
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = execute_create_book(&state.service_deps, req.to_command()).await?;
    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PUT /books/:id - 書籍を全項目更新
///
/// 強制されるビジネスルール:
/// - パスのIDとボディのIDが一致すること
/// - 全単射不変条件（更新対象自身は除外）
/// - 貸出状態は無条件に再計算される
pub async fn replace_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplaceBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book =
        execute_replace_book(&state.service_deps, BookId::from_uuid(id), req.to_command()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// PUT /books/:id/status - 書籍のステータスのみ更新
///
/// 識別項目はこの経路では変更できないため、識別子検証は行われない。
pub async fn update_book_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_update_book_status(&state.service_deps, req.to_command(id)).await?;
    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    execute_delete_book(&state.service_deps, BookId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (読み取り)
// ============================================================================

/// GET /books - 全書籍を取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/search - タイトル・著者で検索
///
/// クエリパラメータ:
/// - title: タイトルの部分一致パターン（オプション）
/// - author: 著者の部分一致パターン（オプション）
///
/// どちらも大文字小文字を区別せず、両方指定時はAND条件。
pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_search_books(&state.service_deps, query.title, query.author).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/availability - 複数タイトルの同時貸出可能日を照会
///
/// クエリパラメータ:
/// - title1, title2, title3: 対象タイトル（最大3件、空は無視）
/// - date: 対象日
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let availability = execute_find_availability(&state.service_deps, query.to_command()).await?;
    Ok(Json(AvailabilityResponse::from(availability)))
}
