//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。メッセージは `clipctl: <message>` として stderr に表示し、
//! どのエラーでも終了コードは 1（main 側で決める）。

/// clipctl のエラー型
///
/// 環境・I/O・サブプロセス・引数・入力検証・JSON で分類する。
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 実行環境の問題（クリップボードユーティリティ不在・非対応 OS・HOME 未解決）
    #[error("{0}")]
    Env(String),

    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),

    /// サブプロセスの起動失敗・非ゼロ終了（捕捉した stderr を含む）
    #[error("{0}")]
    Subprocess(String),

    /// 引数不正（使い方表示の対象）
    #[error("{0}")]
    InvalidArgument(String),

    /// 入力検証エラー（未知の変換名・フック名・範囲外インデックス等）
    #[error("{0}")]
    Validation(String),

    /// JSON の解析・整形失敗
    #[error("{0}")]
    Json(String),
}

impl Error {
    /// 環境エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// サブプロセスエラー
    pub fn subprocess(msg: impl Into<String>) -> Self {
        Error::Subprocess(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// 入力検証エラー
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// 使い方表示を伴うエラーか（引数不正のみ true）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert!(err.is_usage());

        let err = Error::env("no HOME");
        assert_eq!(err.to_string(), "no HOME");
        assert!(!err.is_usage());
    }

    #[test]
    fn test_error_display_passes_message_through() {
        let err = Error::subprocess("failed to read clipboard: stderr: boom");
        assert_eq!(err.to_string(), "failed to read clipboard: stderr: boom");
    }
}
