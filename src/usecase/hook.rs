//! Hook コマンドのユースケース（実行・一覧・ディレクトリ表示）

use crate::adapter::clipboard;
use crate::error::Error;
use crate::hooks::HookRunner;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Process};
use std::io::Write;
use std::sync::Arc;

/// Hook コマンドのユースケース
pub struct HookUseCase {
    process: Arc<dyn Process>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    env_resolver: Arc<dyn EnvResolver>,
}

impl HookUseCase {
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

    fn hook_runner(&self) -> Result<HookRunner, Error> {
        let config_dir = self.env_resolver.resolve_config_dir()?;
        HookRunner::new(Arc::clone(&self.fs), Arc::clone(&self.process), &config_dir)
    }

    /// フックをクリップボード内容に対して実行し、結果を書き戻す
    pub fn run(&self, name: &str) -> Result<i32, Error> {
        let runner = self.hook_runner()?;
        let clipboard = clipboard::detect(Arc::clone(&self.process))?;
        let text = clipboard.read()?;

        let output = runner.execute(name, &text)?;
        clipboard.write(&output)?;

        super::append_history_best_effort(&self.fs, &self.clock, &self.env_resolver, &output);

        eprintln!("✓ Executed hook: {}", name);
        print!("{}", output);
        std::io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))?;
        Ok(0)
    }

    /// 利用可能なフックの一覧を表示する
    pub fn list(&self) -> Result<i32, Error> {
        let runner = self.hook_runner()?;
        let hooks = runner.list()?;

        if hooks.is_empty() {
            println!("No hooks available");
            println!("Add executable scripts to: {}", runner.hooks_dir().display());
            return Ok(0);
        }

        println!("Available hooks:");
        for hook in &hooks {
            println!("  - {}", hook.name);
        }
        Ok(0)
    }

    /// フックディレクトリのパスを表示する
    pub fn dir(&self) -> Result<i32, Error> {
        let runner = self.hook_runner()?;
        println!("{}", runner.hooks_dir().display());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{StdClock, StdFileSystem, StdProcess};
    use crate::usecase::testutil::FixedEnvResolver;

    fn use_case(config_dir: &std::path::Path) -> HookUseCase {
        HookUseCase::new(
            Arc::new(StdProcess),
            Arc::new(StdFileSystem),
            Arc::new(StdClock),
            Arc::new(FixedEnvResolver(config_dir.to_path_buf())),
        )
    }

    #[test]
    fn test_list_creates_hooks_dir_and_succeeds_when_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let code = use_case(tmp.path()).list().unwrap();
        assert_eq!(code, 0);
        assert!(tmp.path().join("hooks").is_dir());
    }

    #[test]
    fn test_dir_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(use_case(tmp.path()).dir().unwrap(), 0);
    }
}
