use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// 純粋関数：呼び出し元のタイムゾーンオフセットを無視し、
/// 壁時計の値をそのままUTCとして再解釈する
///
/// 出版日と検索対象日はカタログ全体で単一の時刻基準（UTC）で
/// 保存・比較される。暗黙の代入フックではなく、各操作の入口で
/// 一度だけ明示的に実行することで、正準化を単独でテスト可能にする。
pub fn canonical_utc(dt: DateTime<FixedOffset>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&dt.naive_local())
}
