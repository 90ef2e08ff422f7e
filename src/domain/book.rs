#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;
use super::errors::StatusUpdateError;

/// 貸出期間（日数）
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// 貸出中を意味するステータス値
///
/// ステータスは自由記述の文字列だが、意味を持つのはこの値のみ。
/// それ以外の値はすべて「貸出中でない」として扱われる。
pub const STATUS_BORROWED: &str = "borrowed";

/// Book集約 - カタログ唯一のエンティティ
///
/// 不変条件：
/// - idはストアが採番し、以後は不変
/// - due_dateはstatusが"borrowed"のときのみ意味を持つ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<Utc>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// 登録前の書籍レコード（IDはストアが採番する）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<Utc>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// ステータスが貸出中を意味するか
pub fn is_borrowed(status: &str) -> bool {
    status == STATUS_BORROWED
}

/// 更新時の返却期限の導出
///
/// borrowedは無条件にnow + 7日。それ以外はクリア。
fn due_date_on_update(status: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if is_borrowed(status) {
        Some(now + Duration::days(LOAN_PERIOD_DAYS))
    } else {
        None
    }
}

/// 純粋関数：登録時の貸出状態遷移
///
/// ビジネスルール：
/// - statusが"borrowed"で返却期限の指定がない場合のみ now + 7日 を設定
/// - 呼び出し元が明示した返却期限は上書きしない（この規則は登録時のみ）
///
/// nowは遷移時点の実時刻であり、出版日や呼び出し元の日付ではない。
/// 副作用なし。新しいNewBookを返す。
pub fn register_book(draft: NewBook, now: DateTime<Utc>) -> NewBook {
    if is_borrowed(&draft.status) && draft.due_date.is_none() {
        NewBook {
            due_date: Some(now + Duration::days(LOAN_PERIOD_DAYS)),
            ..draft
        }
    } else {
        draft
    }
}

/// 純粋関数：全項目更新の遷移
///
/// ビジネスルール：
/// - 可変項目をすべてdraftの値で上書きする（idは不変）
/// - 返却期限は無条件に再計算：borrowedならnow + 7日
///   （呼び出し元が指定した返却期限は破棄）、それ以外はクリア
///
/// 副作用なし。新しいBookを返す。
pub fn replace_book(current: &Book, draft: NewBook, now: DateTime<Utc>) -> Book {
    let due_date = due_date_on_update(&draft.status, now);
    Book {
        id: current.id,
        title: draft.title,
        author: draft.author,
        isbn: draft.isbn,
        publish_date: draft.publish_date,
        status: draft.status,
        due_date,
    }
}

/// 純粋関数：ステータスのみ更新の遷移
///
/// ビジネスルール：
/// - 返却期限の再計算は全項目更新と同じ（無条件）
/// - 識別項目（title / author / isbn / publish_date）には触れない
/// - 空のステータスは拒否する
///
/// 副作用なし。新しいBookを返す。
pub fn update_status(
    current: &Book,
    status: &str,
    now: DateTime<Utc>,
) -> Result<Book, StatusUpdateError> {
    if status.is_empty() {
        return Err(StatusUpdateError::MissingStatus);
    }

    Ok(Book {
        status: status.to_string(),
        due_date: due_date_on_update(status, now),
        ..current.clone()
    })
}

/// 純粋関数：日付Dの時点で貸出可能か
///
/// 返却期限がないか、期限がDより厳密に前なら貸出可能。
/// 期限がちょうどDの書籍は、その時点までは貸出中として扱う。
pub fn is_available_as_of(book: &Book, date: DateTime<Utc>) -> bool {
    match book.due_date {
        None => true,
        Some(due) => due < date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(status: &str, due_date: Option<DateTime<Utc>>) -> NewBook {
        NewBook {
            title: "Harry Potter and the Chamber of Secrets".to_string(),
            author: "J.K. Rowling".to_string(),
            isbn: "9780747538401".to_string(),
            publish_date: Utc.with_ymd_and_hms(1998, 7, 2, 0, 0, 0).single().unwrap(),
            status: status.to_string(),
            due_date,
        }
    }

    fn book(status: &str, due_date: Option<DateTime<Utc>>) -> Book {
        let d = draft(status, due_date);
        Book {
            id: BookId::new(),
            title: d.title,
            author: d.author,
            isbn: d.isbn,
            publish_date: d.publish_date,
            status: d.status,
            due_date: d.due_date,
        }
    }

    // TDD: register_book() のテスト
    #[test]
    fn test_register_borrowed_without_due_date_derives_seven_days() {
        let now = Utc::now();
        let registered = register_book(draft("borrowed", None), now);
        assert_eq!(registered.due_date, Some(now + Duration::days(7)));
    }

    #[test]
    fn test_register_borrowed_with_explicit_due_date_keeps_it() {
        let now = Utc::now();
        let explicit = now + Duration::days(30);
        let registered = register_book(draft("borrowed", Some(explicit)), now);
        // 登録時に限り、明示された返却期限は上書きしない
        assert_eq!(registered.due_date, Some(explicit));
    }

    #[test]
    fn test_register_available_does_not_derive_due_date() {
        let registered = register_book(draft("available", None), Utc::now());
        assert_eq!(registered.due_date, None);
    }

    // TDD: replace_book() のテスト
    #[test]
    fn test_replace_borrowed_always_resets_due_date() {
        let now = Utc::now();
        let current = book("available", None);
        let supplied = now + Duration::days(100);

        let updated = replace_book(&current, draft("borrowed", Some(supplied)), now);

        // 呼び出し元の指定は破棄され、無条件に now + 7日 になる
        assert_eq!(updated.due_date, Some(now + Duration::days(7)));
        assert_eq!(updated.status, "borrowed");
    }

    #[test]
    fn test_replace_non_borrowed_clears_due_date() {
        let now = Utc::now();
        let current = book("borrowed", Some(now + Duration::days(3)));

        let updated = replace_book(&current, draft("available", None), now);

        assert_eq!(updated.due_date, None);
    }

    #[test]
    fn test_replace_keeps_id_and_overwrites_mutable_fields() {
        let now = Utc::now();
        let current = book("available", None);
        let mut new_draft = draft("available", None);
        new_draft.title = "Harry Potter and the Prisoner of Azkaban".to_string();
        new_draft.isbn = "9780747542155".to_string();

        let updated = replace_book(&current, new_draft, now);

        assert_eq!(updated.id, current.id);
        assert_eq!(updated.title, "Harry Potter and the Prisoner of Azkaban");
        assert_eq!(updated.isbn, "9780747542155");
    }

    #[test]
    fn test_replace_treats_unknown_status_as_not_borrowed() {
        let now = Utc::now();
        let current = book("borrowed", Some(now));

        let updated = replace_book(&current, draft("lost", None), now);

        // "borrowed"以外のステータスに意味はなく、返却期限はクリアされる
        assert_eq!(updated.status, "lost");
        assert_eq!(updated.due_date, None);
    }

    // TDD: update_status() のテスト
    #[test]
    fn test_update_status_to_borrowed_derives_due_date() {
        let now = Utc::now();
        let current = book("available", None);

        let updated = update_status(&current, "borrowed", now).unwrap();

        assert_eq!(updated.status, "borrowed");
        assert_eq!(updated.due_date, Some(now + Duration::days(7)));
    }

    #[test]
    fn test_update_status_leaves_identity_fields_untouched() {
        let now = Utc::now();
        let current = book("available", None);

        let updated = update_status(&current, "borrowed", now).unwrap();

        assert_eq!(updated.id, current.id);
        assert_eq!(updated.title, current.title);
        assert_eq!(updated.author, current.author);
        assert_eq!(updated.isbn, current.isbn);
        assert_eq!(updated.publish_date, current.publish_date);
    }

    #[test]
    fn test_update_status_to_available_clears_due_date() {
        let now = Utc::now();
        let current = book("borrowed", Some(now + Duration::days(5)));

        let updated = update_status(&current, "available", now).unwrap();

        assert_eq!(updated.due_date, None);
    }

    #[test]
    fn test_update_status_rejects_empty_status() {
        let current = book("available", None);
        let result = update_status(&current, "", Utc::now());
        assert_eq!(result.unwrap_err(), StatusUpdateError::MissingStatus);
    }

    // TDD: is_available_as_of() のテスト
    #[test]
    fn test_available_when_no_due_date() {
        let b = book("available", None);
        assert!(is_available_as_of(&b, Utc::now()));
    }

    #[test]
    fn test_available_when_due_date_strictly_before() {
        let date = Utc::now();
        let b = book("borrowed", Some(date - Duration::days(1)));
        assert!(is_available_as_of(&b, date));
    }

    #[test]
    fn test_not_available_when_due_date_equals_date() {
        // 期限ちょうどの日はまだ貸出中として扱う（厳密な < 比較）
        let date = Utc::now();
        let b = book("borrowed", Some(date));
        assert!(!is_available_as_of(&b, date));
    }

    #[test]
    fn test_not_available_when_due_date_after() {
        let date = Utc::now();
        let b = book("borrowed", Some(date + Duration::days(1)));
        assert!(!is_available_as_of(&b, date));
    }
}
