//! サブプロセス実行の Outbound ポート
//!
//! クリップボードユーティリティやフックの起動を trait で抽象化する。
//! 通信は子プロセスの stdin/stdout/stderr のみ。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// サブプロセスの実行結果（終了コードと捕捉済み stdout/stderr）
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// 終了コード 0 なら成功
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// サブプロセス実行の抽象
///
/// 実装は `adapter::StdProcess`（std::process::Command + パイプ）など。
pub trait Process: Send + Sync {
    /// プログラムを起動し、stdin へ入力を流し、stdout/stderr を捕捉して返す。
    /// 子プロセスが終了するまでブロックする（タイムアウトなし）。
    fn run_piped(&self, program: &Path, args: &[String], stdin: &str)
        -> Result<CommandOutput, Error>;

    /// 実行パス（PATH）上でプログラムを解決する
    fn lookup(&self, program: &str) -> Option<PathBuf>;
}
