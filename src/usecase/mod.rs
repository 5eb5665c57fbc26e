//! ユースケース（コマンドごとに 1 構造体）
//!
//! 各ユースケースは Arc<dyn Port> を注入され、run で終了コードを返す。
//! クリップボードバックエンドと履歴ストアは、それを使うコマンドの実行時点で構築する。

pub mod clear;
pub mod copy;
pub mod history;
pub mod hook;
pub mod paste;
pub mod transform;

pub use clear::ClearUseCase;
pub use copy::CopyUseCase;
pub use history::HistoryUseCase;
pub use hook::HookUseCase;
pub use paste::PasteUseCase;
pub use transform::TransformUseCase;

use crate::error::Error;
use crate::history::HistoryStore;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem};
use std::sync::Arc;

/// クリップボード書き込み成功後の履歴追記。
/// 失敗してもコマンド自体は成功扱いにし、警告だけ stderr へ出す。
pub(crate) fn append_history_best_effort(
    fs: &Arc<dyn FileSystem>,
    clock: &Arc<dyn Clock>,
    env_resolver: &Arc<dyn EnvResolver>,
    content: &str,
) {
    let result: Result<(), Error> = env_resolver.resolve_config_dir().and_then(|dir| {
        let mut store = HistoryStore::open(Arc::clone(fs), Arc::clone(clock), &dir)?;
        store.add(content)
    });
    if let Err(e) = result {
        eprintln!("Warning: failed to save to history: {}", e);
    }
}
