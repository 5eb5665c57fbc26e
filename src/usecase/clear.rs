//! Clear コマンドのユースケース

use crate::error::Error;
use crate::history::HistoryStore;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem};
use std::sync::Arc;

/// Clear コマンドのユースケース
pub struct ClearUseCase {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    env_resolver: Arc<dyn EnvResolver>,
}

impl ClearUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        env_resolver: Arc<dyn EnvResolver>,
    ) -> Self {
        Self {
            fs,
            clock,
            env_resolver,
        }
    }

    /// 履歴を空にして永続化する
    pub fn run(&self) -> Result<i32, Error> {
        let config_dir = self.env_resolver.resolve_config_dir()?;
        let mut store =
            HistoryStore::open(Arc::clone(&self.fs), Arc::clone(&self.clock), &config_dir)?;
        store.clear()?;

        println!("✓ History cleared");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{StdClock, StdFileSystem};
    use crate::usecase::testutil::FixedEnvResolver;

    #[test]
    fn test_run_empties_persisted_history() {
        let tmp = tempfile::tempdir().unwrap();
        let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
        let clock: Arc<dyn Clock> = Arc::new(StdClock);

        {
            let mut store =
                HistoryStore::open(Arc::clone(&fs), Arc::clone(&clock), tmp.path()).unwrap();
            store.add("one").unwrap();
            store.add("two").unwrap();
        }

        let use_case = ClearUseCase::new(
            Arc::clone(&fs),
            Arc::clone(&clock),
            Arc::new(FixedEnvResolver(tmp.path().to_path_buf())),
        );
        assert_eq!(use_case.run().unwrap(), 0);

        let reloaded = HistoryStore::open(fs, clock, tmp.path()).unwrap();
        assert!(reloaded.is_empty());
    }
}
