//! アダプター（外界の I/O を trait 実装で提供）
//!
//! usecase は ports の trait 経由でのみクリップボード・ファイル・時刻・プロセスに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod clipboard;
pub mod file_json_log;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_process;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
