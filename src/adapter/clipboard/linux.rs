//! Linux クリップボードアダプター（xclip 優先、なければ xsel）

use crate::error::Error;
use crate::ports::outbound::{Clipboard, Process};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinuxTool {
    Xclip,
    Xsel,
}

/// xclip / xsel を起動する Clipboard 実装
pub struct LinuxClipboard {
    process: Arc<dyn Process>,
    tool: LinuxTool,
    tool_path: PathBuf,
}

impl LinuxClipboard {
    /// PATH 上で xclip を探し、なければ xsel にフォールバックする。
    /// どちらも見つからなければ構築失敗。
    pub fn new(process: Arc<dyn Process>) -> Result<Self, Error> {
        if let Some(path) = process.lookup("xclip") {
            return Ok(Self {
                process,
                tool: LinuxTool::Xclip,
                tool_path: path,
            });
        }
        if let Some(path) = process.lookup("xsel") {
            return Ok(Self {
                process,
                tool: LinuxTool::Xsel,
                tool_path: path,
            });
        }
        Err(Error::env(
            "no clipboard utility found (install xclip or xsel)",
        ))
    }

    fn read_args(&self) -> Vec<String> {
        match self.tool {
            LinuxTool::Xclip => vec![
                "-selection".to_string(),
                "clipboard".to_string(),
                "-o".to_string(),
            ],
            LinuxTool::Xsel => vec!["--clipboard".to_string(), "--output".to_string()],
        }
    }

    fn write_args(&self) -> Vec<String> {
        match self.tool {
            LinuxTool::Xclip => vec!["-selection".to_string(), "clipboard".to_string()],
            LinuxTool::Xsel => vec!["--clipboard".to_string(), "--input".to_string()],
        }
    }
}

impl Clipboard for LinuxClipboard {
    fn read(&self) -> Result<String, Error> {
        let out = self
            .process
            .run_piped(&self.tool_path, &self.read_args(), "")?;
        if !out.success() {
            return Err(Error::subprocess(format!(
                "failed to read clipboard: exit status {}, stderr: {}",
                out.status,
                out.stderr.trim_end()
            )));
        }
        Ok(out.stdout)
    }

    fn write(&self, text: &str) -> Result<(), Error> {
        let out = self
            .process
            .run_piped(&self.tool_path, &self.write_args(), text)?;
        if !out.success() {
            return Err(Error::subprocess(format!(
                "failed to write clipboard: exit status {}, stderr: {}",
                out.status,
                out.stderr.trim_end()
            )));
        }
        Ok(())
    }

    fn available(&self) -> bool {
        true
    }
}
