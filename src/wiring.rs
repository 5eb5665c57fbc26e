//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use crate::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem, StdProcess};
use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Log, Process};
use crate::transform::TransformRegistry;
use crate::usecase::{
    ClearUseCase, CopyUseCase, HistoryUseCase, HookUseCase, PasteUseCase, TransformUseCase,
};

/// 配線で組み立てたユースケース群（main の Command ディスパッチで利用）
pub struct App {
    pub copy_use_case: CopyUseCase,
    pub paste_use_case: PasteUseCase,
    pub history_use_case: HistoryUseCase,
    pub transform_use_case: TransformUseCase,
    pub hook_use_case: HookUseCase,
    pub clear_use_case: ClearUseCase,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_clipctl() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let process: Arc<dyn Process> = Arc::new(StdProcess);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let registry = Arc::new(TransformRegistry::new());

    App {
        copy_use_case: CopyUseCase::new(
            Arc::clone(&process),
            Arc::clone(&fs),
            Arc::clone(&clock),
            Arc::clone(&env_resolver),
        ),
        paste_use_case: PasteUseCase::new(Arc::clone(&process)),
        history_use_case: HistoryUseCase::new(
            Arc::clone(&process),
            Arc::clone(&fs),
            Arc::clone(&clock),
            Arc::clone(&env_resolver),
        ),
        transform_use_case: TransformUseCase::new(
            Arc::clone(&process),
            Arc::clone(&fs),
            Arc::clone(&clock),
            Arc::clone(&env_resolver),
            registry,
        ),
        hook_use_case: HookUseCase::new(
            Arc::clone(&process),
            Arc::clone(&fs),
            Arc::clone(&clock),
            Arc::clone(&env_resolver),
        ),
        clear_use_case: ClearUseCase::new(fs, clock, env_resolver),
        logger,
    }
}
