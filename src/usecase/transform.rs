//! Transform コマンドのユースケース

use crate::adapter::clipboard;
use crate::error::Error;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Process};
use crate::transform::TransformRegistry;
use std::io::Write;
use std::sync::Arc;

/// Transform コマンドのユースケース
///
/// クリップボードを読み、名前付き変換を適用し、結果を書き戻して履歴に残す。
pub struct TransformUseCase {
    process: Arc<dyn Process>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    env_resolver: Arc<dyn EnvResolver>,
    registry: Arc<TransformRegistry>,
}

impl TransformUseCase {
    pub fn new(
        process: Arc<dyn Process>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        env_resolver: Arc<dyn EnvResolver>,
        registry: Arc<TransformRegistry>,
    ) -> Self {
        Self {
            process,
            fs,
            clock,
            env_resolver,
            registry,
        }
    }

    pub fn run(&self, name: Option<&str>) -> Result<i32, Error> {
        let name = name.ok_or_else(|| {
            Error::invalid_argument(format!(
                "transformation name required (available: {})",
                self.registry.list().join(", ")
            ))
        })?;

        let clipboard = clipboard::detect(Arc::clone(&self.process))?;
        let text = clipboard.read()?;
        let transformed = self.registry.apply(name, &text)?;
        clipboard.write(&transformed)?;

        super::append_history_best_effort(&self.fs, &self.clock, &self.env_resolver, &transformed);

        eprintln!("✓ Applied transformation: {}", name);
        print!("{}", transformed);
        std::io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{StdClock, StdFileSystem, StdProcess};
    use crate::usecase::testutil::FixedEnvResolver;

    #[test]
    fn test_run_without_name_is_usage_error_listing_names() {
        let tmp = tempfile::tempdir().unwrap();
        let use_case = TransformUseCase::new(
            Arc::new(StdProcess),
            Arc::new(StdFileSystem),
            Arc::new(StdClock),
            Arc::new(FixedEnvResolver(tmp.path().to_path_buf())),
            Arc::new(TransformRegistry::new()),
        );

        let err = use_case.run(None).unwrap_err();
        assert!(err.is_usage());
        let msg = err.to_string();
        assert!(msg.contains("transformation name required"));
        assert!(msg.contains("base64"));
        assert!(msg.contains("json-minify"));
    }
}
