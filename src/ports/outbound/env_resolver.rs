//! 環境変数からの設定ルート解決（Outbound ポート）

use crate::error::Error;
use std::path::PathBuf;

/// 設定ルートディレクトリの解決
///
/// 実装は `adapter::StdEnvResolver`（CLIPCTL_HOME / XDG_CONFIG_HOME / HOME の順）や
/// テスト用の固定ディレクトリなど。
pub trait EnvResolver: Send + Sync {
    /// 設定ルートディレクトリ（履歴ファイル・フックディレクトリ・ログの置き場所）
    fn resolve_config_dir(&self) -> Result<PathBuf, Error>;

    /// 構造化ログの出力先ファイルパス
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_config_dir()?.join("log.jsonl"))
    }
}
