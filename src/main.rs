mod adapter;
mod cli;
mod domain;
mod error;
mod history;
mod hooks;
mod ports;
mod transform;
mod usecase;
mod wiring;

use std::collections::BTreeMap;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::Command;
use error::Error;
use ports::inbound::RunClipctlApp;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use wiring::{wire_clipctl, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunClipctlApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        if !config.help && config.command_name.is_none() {
            return Err(Error::invalid_argument("command required"));
        }

        let command = config_to_command(&config);
        self.log_lifecycle(&command);

        let result = self.dispatch(command);
        if let Err(ref e) = result {
            self.log_error(e);
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, command: Command) -> Result<i32, Error> {
        match command {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Version => {
                println!("clipctl version {}", env!("CARGO_PKG_VERSION"));
                Ok(0)
            }
            Command::Copy { text } => {
                let text = if text.is_empty() {
                    read_stdin()?
                } else {
                    text.join(" ")
                };
                self.app.copy_use_case.run(&text)
            }
            Command::Paste => self.app.paste_use_case.run(),
            Command::History { limit, all, get } => {
                self.app.history_use_case.run(limit, all, get)
            }
            Command::Transform { name } => self.app.transform_use_case.run(name.as_deref()),
            Command::Hook { name, list, dir } => {
                if list {
                    return self.app.hook_use_case.list();
                }
                if dir {
                    return self.app.hook_use_case.dir();
                }
                match name {
                    Some(name) => self.app.hook_use_case.run(&name),
                    None => Err(Error::invalid_argument(
                        "hook name or option required (use --list to see available hooks, --dir to see hooks directory)",
                    )),
                }
            }
            Command::Clear => self.app.clear_use_case.run(),
            Command::Unknown(name) => {
                Err(Error::invalid_argument(format!("Unknown command: {}", name)))
            }
        }
    }

    fn log_lifecycle(&self, command: &Command) {
        let rec = LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command dispatched".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert(
                    "command".to_string(),
                    serde_json::json!(command.label()),
                );
                Some(m)
            },
        };
        // ログ書き込みの失敗でコマンド自体を壊さない
        let _ = self.app.logger.log(&rec);
    }

    fn log_error(&self, error: &Error) {
        let rec = LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Error,
            message: error.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("error".to_string()),
            fields: None,
        };
        let _ = self.app.logger.log(&rec);
    }
}

/// copy で引数が無いとき、stdin を全部読み込む
fn read_stdin() -> Result<String, Error> {
    use std::io::Read;
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
    Ok(buf)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("clipctl: {}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: clipctl <command> [arguments]   (see 'clipctl help')");
}

fn print_help() {
    println!("clipctl - Advanced clipboard manager and transformer");
    println!();
    println!("Usage:");
    println!("  clipctl <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  copy, c [text]          Copy text to clipboard (reads from stdin if no text provided)");
    println!("  paste, p                Paste text from clipboard");
    println!("  history, h [options]    Show clipboard history");
    println!("    -n <number>           Show only last N entries (default: 10)");
    println!("    -a, --all             Show all entries");
    println!("    -g, --get <index>     Get specific entry by index and copy to clipboard");
    println!("  transform, t <name>     Transform clipboard content");
    println!("    Available transformations:");
    println!("      json        - Format JSON with indentation");
    println!("      json-minify - Minify JSON");
    println!("      trim        - Trim whitespace");
    println!("      upper       - Convert to uppercase");
    println!("      lower       - Convert to lowercase");
    println!("      title       - Convert to title case");
    println!("      base64      - Encode to base64");
    println!("      base64d     - Decode from base64");
    println!("      url         - URL encode");
    println!("      urld        - URL decode");
    println!("      reverse     - Reverse text");
    println!("  hook <name>             Execute a custom hook script on clipboard content");
    println!("    --list                List available hooks");
    println!("    --dir                 Show hooks directory");
    println!("  clear                   Clear clipboard history");
    println!("  version, v              Show version information");
    println!("  help, -h, --help        Show this help message");
    println!();
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Examples:");
    println!("  clipctl copy \"Hello World\"           # Copy text to clipboard");
    println!("  echo \"data\" | clipctl copy           # Copy from stdin");
    println!("  clipctl paste                        # Paste from clipboard");
    println!("  clipctl history -n 5                 # Show last 5 history entries");
    println!("  clipctl history -g 2                 # Copy history entry 2 to clipboard");
    println!("  clipctl transform base64             # Encode clipboard to base64");
    println!("  clipctl hook my-script               # Run custom hook on clipboard");
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire_clipctl();
    let runner = Runner { app };
    runner.run(config)
}
