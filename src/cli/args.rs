//! clap によるコマンドライン解析
//!
//! 解析結果はいったん Config（生の値）に落とし、config_to_command で
//! ドメインの Command enum へ変換する。

use crate::domain::Command;
use crate::error::Error;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

/// history のデフォルト表示件数
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// コマンド名（None はコマンド未指定）
    pub command_name: Option<String>,
    /// copy のテキスト / transform・hook の名前
    pub command_args: Vec<String>,
    pub history_limit: Option<usize>,
    pub history_all: bool,
    pub history_get: Option<i64>,
    pub hook_list: bool,
    pub hook_dir: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            command_name: None,
            command_args: Vec::new(),
            history_limit: None,
            history_all: false,
            history_get: None,
            hook_list: false,
            hook_dir: false,
        }
    }
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("clipctl")
            .about("Advanced clipboard manager and transformer")
            .subcommand_required(false)
            .subcommand(
                clap::Command::new("copy")
                    .visible_alias("c")
                    .about("Copy text to clipboard (reads from stdin if no text provided)")
                    .arg(
                        clap::Arg::new("text")
                            .value_name("text")
                            .num_args(0..)
                            .allow_hyphen_values(true)
                            .trailing_var_arg(true),
                    ),
            )
            .subcommand(
                clap::Command::new("paste")
                    .visible_alias("p")
                    .about("Paste text from clipboard"),
            )
            .subcommand(
                clap::Command::new("history")
                    .visible_alias("h")
                    .about("Show clipboard history")
                    .arg(
                        clap::Arg::new("limit")
                            .short('n')
                            .value_name("number")
                            .help("Show only last N entries")
                            .value_parser(value_parser!(usize))
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("all")
                            .short('a')
                            .long("all")
                            .help("Show all entries")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(
                        clap::Arg::new("get")
                            .short('g')
                            .long("get")
                            .value_name("index")
                            .help("Get specific entry by index and copy to clipboard")
                            .value_parser(value_parser!(i64))
                            .allow_hyphen_values(true)
                            .num_args(1),
                    ),
            )
            .subcommand(
                clap::Command::new("transform")
                    .visible_alias("t")
                    .about("Transform clipboard content")
                    .arg(clap::Arg::new("name").value_name("name").num_args(0..=1)),
            )
            .subcommand(
                clap::Command::new("hook")
                    .about("Execute a custom hook script on clipboard content")
                    .arg(clap::Arg::new("name").value_name("name").num_args(0..=1))
                    .arg(
                        clap::Arg::new("list")
                            .long("list")
                            .help("List available hooks")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(
                        clap::Arg::new("dir")
                            .long("dir")
                            .help("Show hooks directory")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(clap::Command::new("clear").about("Clear clipboard history"))
            .subcommand(
                clap::Command::new("version")
                    .visible_alias("v")
                    .about("Show version information"),
            )
            .subcommand(clap::Command::new("help").about("Show this help message")),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let mut config = Config {
        help,
        ..Default::default()
    };

    match matches.subcommand() {
        None | Some(("help", _)) => {}
        Some(("copy", m)) => {
            config.command_name = Some("copy".to_string());
            config.command_args = m
                .get_many::<String>("text")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
        }
        Some(("history", m)) => {
            config.command_name = Some("history".to_string());
            config.history_limit = m.get_one::<usize>("limit").copied();
            config.history_all = m.get_flag("all");
            config.history_get = m.get_one::<i64>("get").copied();
        }
        Some(("transform", m)) => {
            config.command_name = Some("transform".to_string());
            config.command_args = m
                .get_one::<String>("name")
                .map(|n| vec![n.clone()])
                .unwrap_or_default();
        }
        Some(("hook", m)) => {
            config.command_name = Some("hook".to_string());
            config.command_args = m
                .get_one::<String>("name")
                .map(|n| vec![n.clone()])
                .unwrap_or_default();
            config.hook_list = m.get_flag("list");
            config.hook_dir = m.get_flag("dir");
        }
        Some((name, _)) => {
            config.command_name = Some(name.to_string());
        }
    }

    config
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
/// 注: clap_complete::generate は当コマンド構成でパニックするため、簡易フォールバックを常に使用する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let subcommands = [
        "clear", "copy", "help", "history", "hook", "paste", "transform", "version",
    ];
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for clipctl (subcommands only)
_clipctl() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _clipctl clipctl
"#,
                subcommands.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for clipctl (subcommands only)
#compdef clipctl
local subcommands
subcommands=({})
_describe 'command' subcommands
"#,
                subcommands
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for clipctl (subcommands only)
complete -c clipctl -a "{}"
"#,
                subcommands.join(" ")
            );
        }
        _ => {}
    }
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    let name = match &config.command_name {
        Some(n) => n.as_str(),
        // コマンド未指定は main 側で usage エラーにする
        None => return Command::Help,
    };
    match name {
        "history" | "h" => Command::History {
            limit: config.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
            all: config.history_all,
            get: config.history_get,
        },
        "hook" => Command::Hook {
            name: config.command_args.first().cloned(),
            list: config.hook_list,
            dir: config.hook_dir,
        },
        _ => Command::parse_with_args(name, &config.command_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert_eq!(config.command_name, None);
        assert!(config.command_args.is_empty());
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_config_to_command_help() {
        let config = Config {
            help: true,
            ..Default::default()
        };
        assert_eq!(config_to_command(&config), Command::Help);
    }

    #[test]
    fn test_config_to_command_copy_with_text() {
        let config = Config {
            command_name: Some("copy".to_string()),
            command_args: vec!["Hello".to_string(), "World".to_string()],
            ..Default::default()
        };
        let cmd = config_to_command(&config);
        assert!(matches!(&cmd, Command::Copy { text } if text == &["Hello", "World"]));
    }

    #[test]
    fn test_config_to_command_history_defaults() {
        let config = Config {
            command_name: Some("history".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config_to_command(&config),
            Command::History {
                limit: DEFAULT_HISTORY_LIMIT,
                all: false,
                get: None,
            }
        );
    }

    #[test]
    fn test_config_to_command_history_with_get() {
        let config = Config {
            command_name: Some("history".to_string()),
            history_get: Some(2),
            ..Default::default()
        };
        assert!(
            matches!(config_to_command(&config), Command::History { get: Some(2), .. })
        );
    }

    #[test]
    fn test_config_to_command_hook_variants() {
        let run = Config {
            command_name: Some("hook".to_string()),
            command_args: vec!["my-script".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config_to_command(&run),
            Command::Hook { name: Some(n), list: false, dir: false } if n == "my-script"
        ));

        let list = Config {
            command_name: Some("hook".to_string()),
            hook_list: true,
            ..Default::default()
        };
        assert!(matches!(
            config_to_command(&list),
            Command::Hook { name: None, list: true, dir: false }
        ));
    }

    #[test]
    fn test_clap_parses_history_flags() {
        let matches = build_clap_command()
            .try_get_matches_from(["clipctl", "history", "-n", "5", "-a"])
            .unwrap();
        let config = matches_to_config(&matches);
        assert_eq!(config.command_name.as_deref(), Some("history"));
        assert_eq!(config.history_limit, Some(5));
        assert!(config.history_all);
    }

    #[test]
    fn test_clap_parses_negative_get_index() {
        let matches = build_clap_command()
            .try_get_matches_from(["clipctl", "history", "-g", "-1"])
            .unwrap();
        let config = matches_to_config(&matches);
        assert_eq!(config.history_get, Some(-1));
    }

    #[test]
    fn test_clap_parses_copy_alias_and_text() {
        let matches = build_clap_command()
            .try_get_matches_from(["clipctl", "c", "Hello", "World"])
            .unwrap();
        let config = matches_to_config(&matches);
        assert_eq!(config.command_name.as_deref(), Some("copy"));
        assert_eq!(config.command_args, vec!["Hello", "World"]);
    }

    #[test]
    fn test_clap_parses_hook_list_flag() {
        let matches = build_clap_command()
            .try_get_matches_from(["clipctl", "hook", "--list"])
            .unwrap();
        let config = matches_to_config(&matches);
        assert!(config.hook_list);
        assert!(!config.hook_dir);
        assert!(config.command_args.is_empty());
    }

    #[test]
    fn test_clap_rejects_unknown_subcommand() {
        let result = build_clap_command().try_get_matches_from(["clipctl", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_clap_help_flag_sets_config_help() {
        let matches = build_clap_command()
            .try_get_matches_from(["clipctl", "--help"])
            .unwrap();
        let config = matches_to_config(&matches);
        assert!(config.help);
    }
}
