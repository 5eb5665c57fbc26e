//! フックランナー
//!
//! 設定ルート配下の hooks/ ディレクトリから実行可能ファイルを発見し、
//! クリップボード内容を stdin に流して実行、stdout を結果として回収する。

use crate::domain::Hook;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, Process};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// フックディレクトリ名（設定ルート直下）
const HOOKS_DIR: &str = "hooks";

/// フックの発見と実行
pub struct HookRunner {
    fs: Arc<dyn FileSystem>,
    process: Arc<dyn Process>,
    hooks_dir: PathBuf,
}

impl HookRunner {
    /// hooks ディレクトリを用意する（無ければ作成）
    pub fn new(
        fs: Arc<dyn FileSystem>,
        process: Arc<dyn Process>,
        config_dir: &Path,
    ) -> Result<Self, Error> {
        let hooks_dir = config_dir.join(HOOKS_DIR);
        fs.create_dir_all(&hooks_dir)?;
        Ok(Self {
            fs,
            process,
            hooks_dir,
        })
    }

    /// 利用可能なフック一覧（ディレクトリ列挙順）
    ///
    /// サブディレクトリと、実行許可ビットのないファイルは除外する。
    pub fn list(&self) -> Result<Vec<Hook>, Error> {
        let mut hooks = Vec::new();
        for path in self.fs.read_dir(&self.hooks_dir)? {
            let meta = match self.fs.metadata(&path) {
                Ok(m) => m,
                Err(_) => continue,
            };
            if meta.is_dir() || !meta.is_executable() {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            hooks.push(Hook { name, path });
        }
        Ok(hooks)
    }

    /// 名前でフックを実行し、stdout を返す
    pub fn execute(&self, name: &str, input: &str) -> Result<String, Error> {
        let path = self.hooks_dir.join(name);

        let meta = self
            .fs
            .metadata(&path)
            .map_err(|_| Error::validation(format!("hook not found: {}", name)))?;
        if meta.is_dir() {
            return Err(Error::validation(format!("hook is a directory: {}", name)));
        }
        if !meta.is_executable() {
            return Err(Error::validation(format!(
                "hook is not executable: {}",
                name
            )));
        }

        let output = self.process.run_piped(&path, &[], input)?;
        if !output.success() {
            return Err(Error::subprocess(format!(
                "hook execution failed: exit status {}, stderr: {}",
                output.status,
                output.stderr.trim_end()
            )));
        }
        Ok(output.stdout)
    }

    /// フックディレクトリのパス
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }
}
