use crate::domain::{self, commands::*, value_objects::*};
use crate::domain::book::{Book, NewBook};
use crate::ports::*;
use chrono::Utc;
use std::sync::Arc;

use super::errors::{CatalogError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
/// グローバルな接続ハンドルではなく、操作ごとに明示的に渡される
/// ケイパビリティ参照としてストアを注入する。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
}

/// ストアから全レコードのスナップショットを取得するヘルパー関数
///
/// 識別子検証と検索・貸出可能日照会で共通利用される。
pub(super) async fn load_snapshot(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.book_store
        .find_all()
        .await
        .map_err(CatalogError::StoreError)
}

/// コマンドの可変項目からストア向けのレコード案を組み立てる
///
/// 出版日の正準化（呼び出し元オフセットの破棄）はここで一度だけ行う。
fn build_draft(
    title: String,
    author: String,
    isbn: String,
    publish_date: chrono::DateTime<chrono::FixedOffset>,
    status: String,
    due_date: Option<chrono::DateTime<Utc>>,
) -> NewBook {
    NewBook {
        title,
        author,
        isbn,
        publish_date: domain::time::canonical_utc(publish_date),
        status,
        due_date,
    }
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - 全単射不変条件を全既存レコードに対して検証する（除外なし）
/// - statusが"borrowed"で返却期限の指定がなければ登録時刻 + 7日を導出
/// - 明示された返却期限は上書きしない
///
/// # 戻り値
/// 採番されたIDを持つ登録済みレコード
pub async fn create_book(deps: &ServiceDependencies, cmd: CreateBook) -> Result<Book> {
    let draft = build_draft(
        cmd.title,
        cmd.author,
        cmd.isbn,
        cmd.publish_date,
        cmd.status,
        cmd.due_date,
    );

    let snapshot = load_snapshot(deps).await?;
    domain::identity::validate_identity(&draft, &snapshot, None)?;

    let draft = domain::book::register_book(draft, Utc::now());

    let book = deps
        .book_store
        .insert(draft)
        .await
        .map_err(CatalogError::StoreError)?;

    tracing::info!(book_id = %book.id.value(), isbn = %book.isbn, "book created");

    Ok(book)
}

/// 書籍を全項目更新する
///
/// ビジネスルール：
/// - パスのIDとボディのIDが一致すること
/// - 全単射不変条件を更新対象自身を除外して検証する
/// - 対象が存在すること
/// - 貸出状態は無条件に再計算（borrowedなら更新時刻 + 7日、それ以外はクリア）
///
/// チェック順序は元の振る舞いを保存している：ID一致 → 識別子検証 → 存在確認。
pub async fn replace_book(
    deps: &ServiceDependencies,
    id: BookId,
    cmd: ReplaceBook,
) -> Result<Book> {
    if cmd.id != id {
        return Err(CatalogError::IdMismatch);
    }

    let draft = build_draft(
        cmd.title,
        cmd.author,
        cmd.isbn,
        cmd.publish_date,
        cmd.status,
        cmd.due_date,
    );

    let snapshot = load_snapshot(deps).await?;
    domain::identity::validate_identity(&draft, &snapshot, Some(id))?;

    let current = deps
        .book_store
        .find_by_id(id)
        .await
        .map_err(CatalogError::StoreError)?
        .ok_or(CatalogError::BookNotFound)?;

    let updated = domain::book::replace_book(&current, draft, Utc::now());

    deps.book_store
        .update(updated.clone())
        .await
        .map_err(CatalogError::StoreError)?;

    tracing::info!(book_id = %id.value(), "book replaced");

    Ok(updated)
}

/// 書籍のステータスのみ更新する
///
/// 識別項目は変更され得ないため、識別子検証は意図的にスキップする。
pub async fn update_book_status(
    deps: &ServiceDependencies,
    cmd: UpdateBookStatus,
) -> Result<Book> {
    if cmd.status.is_empty() {
        return Err(CatalogError::MissingStatus);
    }

    let current = deps
        .book_store
        .find_by_id(cmd.id)
        .await
        .map_err(CatalogError::StoreError)?
        .ok_or(CatalogError::BookNotFound)?;

    let updated = domain::book::update_status(&current, &cmd.status, Utc::now())?;

    deps.book_store
        .update(updated.clone())
        .await
        .map_err(CatalogError::StoreError)?;

    tracing::info!(book_id = %cmd.id.value(), status = %updated.status, "book status updated");

    Ok(updated)
}

/// 書籍を削除する
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    deps.book_store
        .find_by_id(id)
        .await
        .map_err(CatalogError::StoreError)?
        .ok_or(CatalogError::BookNotFound)?;

    deps.book_store
        .delete(id)
        .await
        .map_err(CatalogError::StoreError)?;

    tracing::info!(book_id = %id.value(), "book deleted");

    Ok(())
}

/// 全書籍を取得する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    load_snapshot(deps).await
}

/// タイトル・著者で書籍を検索する
///
/// パターンは大文字小文字を区別しない部分一致。
/// 両方指定された場合はAND条件、未指定のパターンは絞り込みに使われない。
/// 空文字列のパターンは未指定として扱う。
pub async fn search_books(
    deps: &ServiceDependencies,
    title: Option<String>,
    author: Option<String>,
) -> Result<Vec<Book>> {
    let title = title.filter(|t| !t.is_empty()).map(|t| t.to_lowercase());
    let author = author.filter(|a| !a.is_empty()).map(|a| a.to_lowercase());

    let snapshot = load_snapshot(deps).await?;

    Ok(snapshot
        .into_iter()
        .filter(|b| {
            title
                .as_deref()
                .is_none_or(|t| b.title.to_lowercase().contains(t))
                && author
                    .as_deref()
                    .is_none_or(|a| b.author.to_lowercase().contains(a))
        })
        .collect())
}
