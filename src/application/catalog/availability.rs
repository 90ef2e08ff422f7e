use crate::domain::{self, commands::FindAvailability};
use crate::domain::book::Book;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use super::catalog_service::{ServiceDependencies, load_snapshot};
use super::errors::{CatalogError, Result};

/// 前方走査の上限日数（ハードリミット。呼び出し元は延長できない）
pub const MAX_SCAN_DAYS: i64 = 365;

/// 1回の照会で受け付けるタイトル数の上限
pub const MAX_TITLES: usize = 3;

/// 貸出可能日照会の結果
///
/// effective_dateは要求された対象日そのものか、
/// 前方走査で見つかったそれ以降の日付のいずれか。
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    /// 正規化（小文字化）済みの要求タイトル
    pub titles: Vec<String>,
    /// 条件を満たした日付
    pub effective_date: DateTime<Utc>,
    /// その日付の時点で貸出可能な該当レコード
    pub books: Vec<Book>,
}

/// 要求タイトルを正規化する：小文字化し、空のものを落とす
fn normalize_titles(titles: &[String]) -> Vec<String> {
    titles
        .iter()
        .take(MAX_TITLES)
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 複数タイトルの同時貸出可能日を調べる
///
/// アルゴリズム：
/// 1. タイトルを正規化し、1件も残らなければNoTitlesProvided
/// 2. 対象日をUTCに正準化
/// 3. 対象日の時点で貸出可能な該当レコードがあれば、対象日を
///    そのまま有効日として即時に返す（この経路は1件で成立する）
/// 4. なければ1日ずつ最大365日まで前進し、貸出可能な「相異なるタイトル」が
///    2件以上になった最初の日を返す
/// 5. 上限内に見つからなければNoAvailabilityFound
///
/// 手順3と4の非対称（1件以上 vs 相異なる2タイトル以上）は
/// 観測された仕様どおりに保存している。
///
/// ストアの読み取りは1回のスナップショットのみ。日ごとの再評価は
/// メモリ上で行われるため、365回の上限は述語評価の回数の上限であり、
/// タイムアウトではない。
pub async fn find_availability(
    deps: &ServiceDependencies,
    cmd: FindAvailability,
) -> Result<Availability> {
    let titles = normalize_titles(&cmd.titles);
    if titles.is_empty() {
        return Err(CatalogError::NoTitlesProvided);
    }

    let target = domain::time::canonical_utc(cmd.date);

    // 要求タイトルに一致するレコードだけを先に絞り込む
    let snapshot = load_snapshot(deps).await?;
    let matching: Vec<Book> = snapshot
        .into_iter()
        .filter(|b| titles.contains(&b.title.to_lowercase()))
        .collect();

    // 即時経路：対象日の時点で貸出可能なレコードが1件でもあれば成立
    let available_now: Vec<Book> = matching
        .iter()
        .filter(|b| domain::book::is_available_as_of(b, target))
        .cloned()
        .collect();

    if !available_now.is_empty() {
        return Ok(Availability {
            titles,
            effective_date: target,
            books: available_now,
        });
    }

    // 前方走査：相異なる2タイトル以上が貸出可能になる最初の日を探す
    for day in 1..=MAX_SCAN_DAYS {
        let candidate_date = target + Duration::days(day);

        let available: Vec<&Book> = matching
            .iter()
            .filter(|b| domain::book::is_available_as_of(b, candidate_date))
            .collect();

        let distinct_titles: HashSet<String> =
            available.iter().map(|b| b.title.to_lowercase()).collect();

        if distinct_titles.len() >= 2 {
            return Ok(Availability {
                titles,
                effective_date: candidate_date,
                books: available.into_iter().cloned().collect(),
            });
        }
    }

    Err(CatalogError::NoAvailabilityFound)
}
