//! 標準サブプロセス実行（std::process::Command + パイプ）

use crate::error::Error;
use crate::ports::outbound::{CommandOutput, Process};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 標準ライブラリの Command を使う Process 実装
///
/// stdin へ入力を書き切ってから stdout/stderr を回収する。
/// 子プロセスが終了するまでブロックする。
#[derive(Debug, Clone, Default)]
pub struct StdProcess;

impl Process for StdProcess {
    fn run_piped(
        &self,
        program: &Path,
        args: &[String],
        stdin: &str,
    ) -> Result<CommandOutput, Error> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().map_err(|e| {
            Error::subprocess(format!("Failed to execute '{}': {}", program.display(), e))
        })?;
        if let Some(mut sin) = child.stdin.take() {
            use std::io::Write;
            sin.write_all(stdin.as_bytes()).map_err(|e| {
                Error::subprocess(format!(
                    "Failed to write stdin of '{}': {}",
                    program.display(),
                    e
                ))
            })?;
            // drop してパイプを閉じ、子プロセスに EOF を伝える
        }
        let output = child.wait_with_output().map_err(|e| {
            Error::subprocess(format!("Failed to wait for '{}': {}", program.display(), e))
        })?;
        Ok(CommandOutput {
            status: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path_var) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let candidate = dir.join(program);
            if is_executable_file(&candidate) {
                return Some(candidate);
            }
            #[cfg(windows)]
            {
                let with_exe = dir.join(format!("{}.exe", program));
                if with_exe.is_file() {
                    return Some(with_exe);
                }
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_finds_sh() {
        let process = StdProcess;
        let path = process.lookup("sh").expect("sh should be on PATH");
        assert!(path.is_absolute());
        assert!(path.ends_with("sh"));
    }

    #[test]
    fn test_lookup_missing_program() {
        let process = StdProcess;
        assert!(process.lookup("clipctl-no-such-program").is_none());
    }

    #[test]
    fn test_run_piped_captures_stdout() {
        let process = StdProcess;
        let sh = process.lookup("sh").unwrap();
        let out = process
            .run_piped(&sh, &["-c".to_string(), "cat".to_string()], "hello pipe")
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "hello pipe");
    }

    #[test]
    fn test_run_piped_reports_exit_status_and_stderr() {
        let process = StdProcess;
        let sh = process.lookup("sh").unwrap();
        let out = process
            .run_piped(
                &sh,
                &["-c".to_string(), "echo oops >&2; exit 3".to_string()],
                "",
            )
            .unwrap();
        assert!(!out.success());
        assert_eq!(out.status, 3);
        assert_eq!(out.stderr, "oops\n");
    }

    #[test]
    fn test_run_piped_spawn_failure() {
        let process = StdProcess;
        let err = process
            .run_piped(Path::new("/no/such/binary"), &[], "")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
