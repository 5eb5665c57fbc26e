//! フック（ユーザー配置の実行可能スクリプト）

use std::path::PathBuf;

/// フックディレクトリ直下で発見された実行可能ファイル
///
/// 永続化はしない。一覧のたびにディレクトリを走査して再計算する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    /// ファイル名がそのままフック名
    pub name: String,
    pub path: PathBuf,
}
