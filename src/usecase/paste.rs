//! Paste コマンドのユースケース

use crate::adapter::clipboard;
use crate::error::Error;
use crate::ports::outbound::Process;
use std::io::Write;
use std::sync::Arc;

/// Paste コマンドのユースケース
pub struct PasteUseCase {
    process: Arc<dyn Process>,
}

impl PasteUseCase {
    pub fn new(process: Arc<dyn Process>) -> Self {
        Self { process }
    }

    /// クリップボード内容をそのまま stdout へ出す（改行は付けない）
    pub fn run(&self) -> Result<i32, Error> {
        let clipboard = clipboard::detect(Arc::clone(&self.process))?;
        let text = clipboard.read()?;

        print!("{}", text);
        // 末尾改行なしの出力が process::exit で失われないよう明示的に flush する
        std::io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))?;
        Ok(0)
    }
}
