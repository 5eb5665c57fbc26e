//! Outbound ポート: アプリが外界（クリップボード・FS・時刻・プロセス・ログ）を使うための trait

pub mod clipboard;
pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod process;

pub use clipboard::Clipboard;
pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use process::{CommandOutput, Process};
