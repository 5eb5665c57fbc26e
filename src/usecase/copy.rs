//! Copy コマンドのユースケース

use crate::adapter::clipboard;
use crate::error::Error;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Process};
use std::sync::Arc;

/// Copy コマンドのユースケース
///
/// クリップボードへ書き込み、成功したら履歴へ追記する。
/// 履歴の失敗は警告止まり（コピー自体は成功）。
pub struct CopyUseCase {
    process: Arc<dyn Process>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    env_resolver: Arc<dyn EnvResolver>,
}

impl CopyUseCase {
    pub fn new(
        process: Arc<dyn Process>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        env_resolver: Arc<dyn EnvResolver>,
    ) -> Self {
        Self {
            process,
            fs,
            clock,
            env_resolver,
        }
    }

    /// テキストをクリップボードへコピーし、履歴に残す
    pub fn run(&self, text: &str) -> Result<i32, Error> {
        let clipboard = clipboard::detect(Arc::clone(&self.process))?;
        clipboard.write(text)?;

        super::append_history_best_effort(&self.fs, &self.clock, &self.env_resolver, text);

        eprintln!("✓ Copied {} bytes to clipboard", text.len());
        Ok(0)
    }
}
