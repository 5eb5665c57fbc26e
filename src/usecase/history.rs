//! History コマンドのユースケース
//!
//! 一覧表示（INDEX / TIME / CONTENT の表形式、新しい順）と、
//! -g によるエントリの再コピーを担当する。

use crate::adapter::clipboard;
use crate::error::Error;
use crate::history::HistoryStore;
use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Process};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// 一覧表示でのプレビュー最大文字数
const PREVIEW_CHARS: usize = 60;

/// History コマンドのユースケース
pub struct HistoryUseCase {
    process: Arc<dyn Process>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    env_resolver: Arc<dyn EnvResolver>,
}

impl HistoryUseCase {
    pub fn new(
        process: Arc<dyn Process>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        env_resolver: Arc<dyn EnvResolver>,
    ) -> Self {
        Self {
            process,
            fs,
            clock,
            env_resolver,
        }
    }

    pub fn run(&self, limit: usize, all: bool, get: Option<i64>) -> Result<i32, Error> {
        let config_dir = self.env_resolver.resolve_config_dir()?;
        let store = HistoryStore::open(Arc::clone(&self.fs), Arc::clone(&self.clock), &config_dir)?;

        if let Some(index) = get {
            return self.copy_entry_back(&store, index);
        }

        let entries = store.list();
        if entries.is_empty() {
            println!("No history entries");
            return Ok(0);
        }

        let total = entries.len();
        let shown = if !all && total > limit {
            &entries[..limit]
        } else {
            entries
        };

        println!("{:<5}  {:<12}  {}", "INDEX", "TIME", "CONTENT");
        println!("{:<5}  {:<12}  {}", "-----", "----", "-------");
        let now = self.clock.now();
        for (i, entry) in shown.iter().enumerate() {
            println!(
                "{:<5}  {:<12}  {}",
                i,
                format_relative_time(entry.timestamp, now),
                preview(&entry.content)
            );
        }

        if !all && total > limit {
            eprintln!("\nShowing {} of {} entries. Use -a to show all.", limit, total);
        }
        Ok(0)
    }

    /// 履歴エントリをクリップボードへ書き戻す（history -g）
    fn copy_entry_back(&self, store: &HistoryStore, index: i64) -> Result<i32, Error> {
        let entry = store.get(index)?;
        let clipboard = clipboard::detect(Arc::clone(&self.process))?;
        clipboard.write(&entry.content)?;
        eprintln!("✓ Copied entry {} to clipboard", index);
        Ok(0)
    }
}

/// 一覧用に内容を 1 行へ丸める（60 文字で切り、改行は `\n` 表示）
fn preview(content: &str) -> String {
    let truncated: String = content.chars().take(PREVIEW_CHARS).collect();
    let mut line = truncated.replace('\n', "\\n");
    if content.chars().count() > PREVIEW_CHARS {
        line.push_str("...");
    }
    line
}

/// 相対時刻表示（1 週間を超えたら日付）
fn format_relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(ts);

    if diff < Duration::minutes(1) {
        return "just now".to_string();
    }
    if diff < Duration::hours(1) {
        let mins = diff.num_minutes();
        return if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        };
    }
    if diff < Duration::hours(24) {
        let hours = diff.num_hours();
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }
    if diff < Duration::days(7) {
        let days = diff.num_days();
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        };
    }
    ts.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, h, m, s).unwrap()
    }

    #[test]
    fn test_format_relative_time_buckets() {
        let now = at(12, 0, 0);
        assert_eq!(format_relative_time(at(11, 59, 30), now), "just now");
        assert_eq!(format_relative_time(at(11, 59, 0), now), "1 min ago");
        assert_eq!(format_relative_time(at(11, 15, 0), now), "45 mins ago");
        assert_eq!(format_relative_time(at(11, 0, 0), now), "1 hour ago");
        assert_eq!(format_relative_time(at(7, 0, 0), now), "5 hours ago");
        assert_eq!(
            format_relative_time(Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_time(Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap(), now),
            "3 days ago"
        );
        assert_eq!(
            format_relative_time(Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap(), now),
            "Jul 01, 2026"
        );
    }

    #[test]
    fn test_preview_truncates_and_escapes_newlines() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("two\nlines"), "two\\nlines");

        let long = "x".repeat(70);
        let line = preview(&long);
        assert_eq!(line, format!("{}...", "x".repeat(60)));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // マルチバイト文字でもバイト境界ではなく文字数で切る
        let long = "あ".repeat(70);
        let line = preview(&long);
        assert_eq!(line.chars().count(), 63);
    }
}
