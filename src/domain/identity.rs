#![allow(dead_code)]

use super::BookId;
use super::book::{Book, NewBook};
use super::errors::IdentityConflict;

/// タイトル・著者の識別用比較（大文字小文字を区別しない）
fn same_identity_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// 候補と既存レコードが同じ (タイトル, 著者, 出版日) を持つか
fn same_triple(candidate: &NewBook, book: &Book) -> bool {
    same_identity_text(&book.title, &candidate.title)
        && same_identity_text(&book.author, &candidate.author)
        && book.publish_date == candidate.publish_date
}

/// 純粋関数：ISBN↔(タイトル, 著者, 出版日) の全単射不変条件を検証する
///
/// カタログ全体の整合性規則であり、レコード単体のバリデーションではない。
/// 書き込み時点の全レコードのスナップショットに対して評価する。
/// 更新の場合は更新対象自身をexcludingで除外する（登録時はNone）。
///
/// チェック順序はエラー報告に影響する：ISBN方向を先に評価するため、
/// 両方向に違反する候補はIsbnとして報告される。
///
/// 副作用なし。検証と書き込みはこの層ではアトミックに結合されないため、
/// チェックと書き込みの間の直列化はストア側の契約とする。
pub fn validate_identity(
    candidate: &NewBook,
    existing: &[Book],
    excluding: Option<BookId>,
) -> Result<(), IdentityConflict> {
    let others: Vec<&Book> = existing
        .iter()
        .filter(|b| excluding != Some(b.id))
        .collect();

    // ISBN方向：同じISBNで異なる (タイトル, 著者, 出版日)
    if others
        .iter()
        .any(|b| b.isbn == candidate.isbn && !same_triple(candidate, b))
    {
        return Err(IdentityConflict::Isbn);
    }

    // 重複方向：同じ (タイトル, 著者, 出版日) で異なるISBN
    if others
        .iter()
        .any(|b| same_triple(candidate, b) && b.isbn != candidate.isbn)
    {
        return Err(IdentityConflict::DuplicateBook);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn publish_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1998, 7, 2, 0, 0, 0).single().unwrap()
    }

    fn candidate(title: &str, author: &str, isbn: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publish_date: publish_date(),
            status: "available".to_string(),
            due_date: None,
        }
    }

    fn existing(title: &str, author: &str, isbn: &str) -> Book {
        let c = candidate(title, author, isbn);
        Book {
            id: BookId::new(),
            title: c.title,
            author: c.author,
            isbn: c.isbn,
            publish_date: c.publish_date,
            status: c.status,
            due_date: c.due_date,
        }
    }

    #[test]
    fn test_accepts_candidate_against_empty_catalog() {
        let c = candidate("Dune", "Frank Herbert", "9780441172719");
        assert!(validate_identity(&c, &[], None).is_ok());
    }

    #[test]
    fn test_accepts_second_copy_of_same_book() {
        // 同じISBNかつ同じ三つ組は同一書籍の複本であり、許可される
        let c = candidate("Dune", "Frank Herbert", "9780441172719");
        let catalog = vec![existing("Dune", "Frank Herbert", "9780441172719")];
        assert!(validate_identity(&c, &catalog, None).is_ok());
    }

    #[test]
    fn test_rejects_same_isbn_with_different_title() {
        let c = candidate("Dune Messiah", "Frank Herbert", "9780441172719");
        let catalog = vec![existing("Dune", "Frank Herbert", "9780441172719")];
        assert_eq!(
            validate_identity(&c, &catalog, None).unwrap_err(),
            IdentityConflict::Isbn
        );
    }

    #[test]
    fn test_rejects_same_triple_with_different_isbn() {
        let c = candidate("Dune", "Frank Herbert", "9999999999999");
        let catalog = vec![existing("Dune", "Frank Herbert", "9780441172719")];
        assert_eq!(
            validate_identity(&c, &catalog, None).unwrap_err(),
            IdentityConflict::DuplicateBook
        );
    }

    #[test]
    fn test_isbn_direction_is_reported_when_both_directions_fail() {
        // ISBNが既存Aと衝突し、三つ組が既存Bと衝突する候補はIsbnを報告する
        let c = candidate("Dune", "Frank Herbert", "9780441172720");
        let catalog = vec![
            existing("Dune Messiah", "Frank Herbert", "9780441172720"),
            existing("Dune", "Frank Herbert", "9780441172719"),
        ];
        assert_eq!(
            validate_identity(&c, &catalog, None).unwrap_err(),
            IdentityConflict::Isbn
        );
    }

    #[test]
    fn test_title_and_author_compare_case_insensitively() {
        let c = candidate("DUNE", "frank herbert", "9999999999999");
        let catalog = vec![existing("Dune", "Frank Herbert", "9780441172719")];
        assert_eq!(
            validate_identity(&c, &catalog, None).unwrap_err(),
            IdentityConflict::DuplicateBook
        );
    }

    #[test]
    fn test_excluding_skips_the_record_being_updated() {
        // 自分自身のISBNを保ったまま他の項目を変える更新は衝突しない
        let current = existing("Dune", "Frank Herbert", "9780441172719");
        let c = candidate("Dune (Deluxe Edition)", "Frank Herbert", "9780441172719");
        let catalog = vec![current.clone()];

        assert_eq!(
            validate_identity(&c, &catalog, None).unwrap_err(),
            IdentityConflict::Isbn
        );
        assert!(validate_identity(&c, &catalog, Some(current.id)).is_ok());
    }

    #[test]
    fn test_different_publish_date_is_a_different_triple() {
        let mut c = candidate("Dune", "Frank Herbert", "9999999999999");
        c.publish_date = Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).single().unwrap();
        let catalog = vec![existing("Dune", "Frank Herbert", "9780441172719")];
        // 出版日が異なれば別の三つ組であり、別ISBNでも衝突しない
        assert!(validate_identity(&c, &catalog, None).is_ok());
    }
}
