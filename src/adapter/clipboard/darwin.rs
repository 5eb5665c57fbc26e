//! macOS クリップボードアダプター（pbcopy / pbpaste）

use crate::error::Error;
use crate::ports::outbound::{Clipboard, Process};
use std::path::PathBuf;
use std::sync::Arc;

/// pbcopy / pbpaste を起動する Clipboard 実装
pub struct DarwinClipboard {
    process: Arc<dyn Process>,
    pbcopy: PathBuf,
    pbpaste: PathBuf,
}

impl DarwinClipboard {
    /// pbcopy と pbpaste の両方が PATH 上で解決できなければ構築失敗
    pub fn new(process: Arc<dyn Process>) -> Result<Self, Error> {
        let pbcopy = process
            .lookup("pbcopy")
            .ok_or_else(|| Error::env("pbcopy not found"))?;
        let pbpaste = process
            .lookup("pbpaste")
            .ok_or_else(|| Error::env("pbpaste not found"))?;
        Ok(Self {
            process,
            pbcopy,
            pbpaste,
        })
    }
}

impl Clipboard for DarwinClipboard {
    fn read(&self) -> Result<String, Error> {
        let out = self.process.run_piped(&self.pbpaste, &[], "")?;
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
        let out = self.process.run_piped(&self.pbcopy, &[], text)?;
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
