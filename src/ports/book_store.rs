use crate::domain::book::{Book, NewBook};
use crate::domain::value_objects::BookId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストアポート
///
/// カタログの唯一の共有可変状態を抽象化する。
/// コアはこのポート越しにのみ読み書きし、プロセス内に可変状態を持たない。
///
/// 検証（全単射不変条件）と書き込みはコア側でアトミックに結合されないため、
/// 実装はチェックと書き込みの間の競合を閉じる直列化
/// （トランザクション分離または外部ロック）を提供することが期待される。
/// すり抜けた競合はストアのエラーとして表面化させ、黙って受理しない。
#[allow(dead_code)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// 書籍を登録し、採番されたIDを持つレコードを返す
    async fn insert(&self, book: NewBook) -> Result<Book>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 全書籍を取得する
    ///
    /// 識別子検証のスナップショット、検索、貸出可能日の照会に使用される。
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// 書籍を上書き保存する
    ///
    /// 対象が存在しない場合はエラーを返す。
    async fn update(&self, book: Book) -> Result<()>;

    /// 書籍を削除する
    ///
    /// 対象が存在しない場合はエラーを返す。
    async fn delete(&self, id: BookId) -> Result<()>;
}
