//! clipctl コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

/// clipctl のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// テキストをクリップボードへコピー（引数なしなら stdin から）
    Copy { text: Vec<String> },

    /// クリップボード内容を stdout へ出力
    Paste,

    /// 履歴の一覧表示、または -g で指定エントリを再コピー
    History {
        limit: usize,
        all: bool,
        get: Option<i64>,
    },

    /// クリップボード内容に名前付き変換を適用
    Transform { name: Option<String> },

    /// フックの実行・一覧・ディレクトリ表示
    Hook {
        name: Option<String>,
        list: bool,
        dir: bool,
    },

    /// 履歴のクリア
    Clear,

    /// バージョン表示
    Version,

    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// コマンド名と引数から Command に解析する（copy / transform は args を使用）
    pub fn parse_with_args(name: &str, args: &[String]) -> Self {
        match name {
            "copy" | "c" => Command::Copy {
                text: args.to_vec(),
            },
            "transform" | "t" => Command::Transform {
                name: args.first().cloned(),
            },
            _ => Self::parse(name),
        }
    }

    /// 文字列を Command に解析する（引数を取らないコマンド）
    pub fn parse(s: &str) -> Self {
        match s {
            "paste" | "p" => Command::Paste,
            "clear" => Command::Clear,
            "version" | "v" => Command::Version,
            "help" => Command::Help,
            _ => Command::Unknown(s.to_string()),
        }
    }

    /// ログ用のコマンド名ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Copy { .. } => "copy",
            Command::Paste => "paste",
            Command::History { .. } => "history",
            Command::Transform { .. } => "transform",
            Command::Hook { .. } => "hook",
            Command::Clear => "clear",
            Command::Version => "version",
            Command::Unknown(_) => "unknown",
        }
    }
}
