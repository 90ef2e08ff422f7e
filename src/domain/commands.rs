use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;

/// コマンド：書籍を登録する
///
/// 出版日は呼び出し元のオフセット付きで受け取り、
/// 操作の入口でUTCに正準化される。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<FixedOffset>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// コマンド：書籍を全項目更新する
///
/// idはリクエストボディ由来。パスのidと一致しない場合は拒否される。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceBook {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_date: DateTime<FixedOffset>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// コマンド：ステータスのみ更新する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookStatus {
    pub id: BookId,
    pub status: String,
}

/// コマンド：複数タイトルの同時貸出可能日を調べる
///
/// タイトルは最大3件。対象日は操作の入口でUTCに正準化される。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindAvailability {
    pub titles: Vec<String>,
    pub date: DateTime<FixedOffset>,
}
