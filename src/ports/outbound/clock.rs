//! 時刻取得の Outbound ポート

use chrono::{DateTime, Utc};

/// 時刻取得の抽象
///
/// 実装は `adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻（UTC）を返す
    fn now(&self) -> DateTime<Utc>;
}
