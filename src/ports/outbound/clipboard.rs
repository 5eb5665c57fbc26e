//! クリップボード Outbound ポート
//!
//! OS のクリップボードは外部ユーティリティ（pbcopy/pbpaste, xclip/xsel, PowerShell）を
//! サブプロセスとして起動して読み書きする。その差異をこの trait の背後に隠す。

use crate::error::Error;

/// クリップボードアクセスの抽象
///
/// 実装は `adapter::clipboard` のプラットフォーム別アダプター。
/// 構築（選択）は起動時に一度だけ行う。
pub trait Clipboard: Send + Sync {
    /// クリップボードの内容をテキストとして読み出す
    fn read(&self) -> Result<String, Error>;

    /// テキストをクリップボードへ書き込む
    fn write(&self, text: &str) -> Result<(), Error>;

    /// バックエンドが利用可能か
    fn available(&self) -> bool;
}
