//! Windows クリップボードアダプター（PowerShell Get-Clipboard / Set-Clipboard）

use crate::error::Error;
use crate::ports::outbound::{Clipboard, Process};
use std::path::PathBuf;
use std::sync::Arc;

/// PowerShell を起動する Clipboard 実装
pub struct WindowsClipboard {
    process: Arc<dyn Process>,
    powershell: PathBuf,
}

impl WindowsClipboard {
    /// powershell.exe、なければ pwsh（PowerShell Core）を PATH 上で解決する
    pub fn new(process: Arc<dyn Process>) -> Result<Self, Error> {
        let powershell = process
            .lookup("powershell.exe")
            .or_else(|| process.lookup("pwsh"))
            .ok_or_else(|| Error::env("powershell not found"))?;
        Ok(Self {
            process,
            powershell,
        })
    }
}

impl Clipboard for WindowsClipboard {
    fn read(&self) -> Result<String, Error> {
        let out = self.process.run_piped(
            &self.powershell,
            &["-Command".to_string(), "Get-Clipboard".to_string()],
            "",
        )?;
        if !out.success() {
            return Err(Error::subprocess(format!(
                "failed to read clipboard: exit status {}, stderr: {}",
                out.status,
                out.stderr.trim_end()
            )));
        }
        // PowerShell は CRLF と末尾改行 1 つを付けるので正規化する
        let normalized = out.stdout.replace("\r\n", "\n");
        Ok(normalized
            .strip_suffix('\n')
            .map(str::to_string)
            .unwrap_or(normalized))
    }

    fn write(&self, text: &str) -> Result<(), Error> {
        let out = self.process.run_piped(
            &self.powershell,
            &[
                "-Command".to_string(),
                "$input | Set-Clipboard".to_string(),
            ],
            text,
        )?;
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
