//! プラットフォーム別クリップボードアダプター
//!
//! OS ごとの外部ユーティリティ（xclip/xsel, pbcopy/pbpaste, PowerShell）を
//! サブプロセスとして起動し、stdin/stdout でテキストを受け渡す。
//! バックエンドの選択は構築時に一度だけ行い、見つからなければ構築自体が失敗する。

mod darwin;
mod linux;
mod windows;

pub use darwin::DarwinClipboard;
pub use linux::LinuxClipboard;
pub use windows::WindowsClipboard;

use crate::error::Error;
use crate::ports::outbound::{Clipboard, Process};
use std::sync::Arc;

/// 実行中の OS に応じたクリップボードバックエンドを構築する
pub fn detect(process: Arc<dyn Process>) -> Result<Box<dyn Clipboard>, Error> {
    detect_for_os(std::env::consts::OS, process)
}

fn detect_for_os(os: &str, process: Arc<dyn Process>) -> Result<Box<dyn Clipboard>, Error> {
    match os {
        "linux" => Ok(Box::new(LinuxClipboard::new(process)?)),
        "macos" => Ok(Box::new(DarwinClipboard::new(process)?)),
        "windows" => Ok(Box::new(WindowsClipboard::new(process)?)),
        other => Err(Error::env(format!("unsupported platform: {}", other))),
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockProcess;
    use super::*;
    use crate::ports::outbound::CommandOutput;

    #[test]
    fn test_detect_unsupported_platform() {
        let process = Arc::new(MockProcess::succeeding(vec![], ""));
        let err = detect_for_os("plan9", process).err().unwrap();
        assert!(err.to_string().contains("unsupported platform: plan9"));
    }

    #[test]
    fn test_detect_linux_without_utilities() {
        let process = Arc::new(MockProcess::succeeding(vec![], ""));
        let err = detect_for_os("linux", process).err().unwrap();
        assert!(err.to_string().contains("xclip or xsel"));
    }

    #[test]
    fn test_detect_linux_prefers_xclip() {
        let process = Arc::new(MockProcess::succeeding(vec!["xclip", "xsel"], "text"));
        let clipboard = detect_for_os("linux", Arc::clone(&process) as Arc<dyn Process>).unwrap();
        assert!(clipboard.available());

        clipboard.read().unwrap();
        let calls = process.calls.lock().unwrap();
        assert!(calls[0].0.ends_with("xclip"));
    }

    #[test]
    fn test_detect_macos_requires_both_tools() {
        let process = Arc::new(MockProcess::succeeding(vec!["pbcopy"], ""));
        let err = detect_for_os("macos", process).err().unwrap();
        assert!(err.to_string().contains("pbpaste"));
    }

    #[test]
    fn test_write_failure_carries_stderr() {
        let process = Arc::new(MockProcess::new(
            vec!["xclip"],
            CommandOutput {
                status: 1,
                stdout: String::new(),
                stderr: "Error: Can't open display\n".to_string(),
            },
        ));
        let clipboard = detect_for_os("linux", process).unwrap();
        let err = clipboard.write("x").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("failed to write clipboard"));
        assert!(msg.contains("Can't open display"));
    }
}
