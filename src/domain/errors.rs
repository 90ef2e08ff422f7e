#![allow(dead_code)]

/// 識別子の全単射不変条件の違反
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityConflict {
    /// 同じISBNが異なる (タイトル, 著者, 出版日) に結び付けられようとした
    Isbn,
    /// 同じ (タイトル, 著者, 出版日) が異なるISBNに結び付けられようとした
    DuplicateBook,
}

/// ステータス更新のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusUpdateError {
    /// ステータスが空
    MissingStatus,
}
