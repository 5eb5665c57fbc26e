//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
///
/// CLIPCTL_HOME > XDG_CONFIG_HOME/clipctl > HOME/.config/clipctl の順で解決する。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_config_dir(&self) -> Result<PathBuf, Error> {
        if let Ok(home) = env::var("CLIPCTL_HOME") {
            if !home.is_empty() {
                return Ok(PathBuf::from(home));
            }
        }

        let config_base = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(|h| PathBuf::from(h).join(".config"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        let mut path = config_base;
        path.push("clipctl");
        Ok(path)
    }
}
