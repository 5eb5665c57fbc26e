//! クリップボード履歴ストア
//!
//! 新しい順の有限リスト（上限 100 件）を JSON ファイルへ同期的に永続化する。
//! ファイルは毎回丸ごと書き直す。排他制御はしない（同時起動は後勝ち）。

use crate::domain::HistoryEntry;
use crate::error::Error;
use crate::ports::outbound::{Clock, FileSystem};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 履歴の最大保持件数
pub const MAX_HISTORY_SIZE: usize = 100;

/// 履歴ファイル名（設定ルート直下）
const HISTORY_FILE: &str = "history.json";

/// クリップボード履歴ストア
///
/// 構築時にファイルから読み込み、変更（add / clear）のたびに全体を書き戻す。
pub struct HistoryStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    file_path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// 設定ディレクトリを用意し、既存の履歴があれば読み込む。
    /// ファイルが無いのはエラーではない（空のストアになる）。壊れた JSON はエラー。
    pub fn open(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        config_dir: &Path,
    ) -> Result<Self, Error> {
        fs.create_dir_all(config_dir)?;
        let file_path = config_dir.join(HISTORY_FILE);

        let mut entries: Vec<HistoryEntry> = if fs.exists(&file_path) {
            let data = fs.read_to_string(&file_path)?;
            serde_json::from_str(&data).map_err(|e| {
                Error::Json(format!(
                    "Failed to parse history file '{}': {}",
                    file_path.display(),
                    e
                ))
            })?
        } else {
            Vec::new()
        };

        // 既存ファイルが上限超過でも読み込み時点で不変条件（len <= 100）を守る。
        // ファイル自体は次の変更まで書き直さない。
        entries.truncate(MAX_HISTORY_SIZE);

        Ok(Self {
            fs,
            clock,
            file_path,
            entries,
        })
    }

    /// 先頭に追記する。空文字列と直前エントリとの重複は無視（no-op）。
    pub fn add(&mut self, content: &str) -> Result<(), Error> {
        if content.is_empty() {
            return Ok(());
        }
        if self
            .entries
            .first()
            .map(|e| e.content == content)
            .unwrap_or(false)
        {
            return Ok(());
        }

        self.entries.insert(
            0,
            HistoryEntry {
                content: content.to_string(),
                timestamp: self.clock.now(),
            },
        );
        self.entries.truncate(MAX_HISTORY_SIZE);
        self.save()
    }

    /// 新しい順の全エントリ（メモリ上、ディスクには触れない）
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// インデックス指定で取得。範囲外（負数含む）はエラー。
    pub fn get(&self, index: i64) -> Result<&HistoryEntry, Error> {
        if index < 0 || index as usize >= self.entries.len() {
            return Err(Error::validation(format!(
                "history index out of range: {}",
                index
            )));
        }
        Ok(&self.entries[index as usize])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全件削除して空リストを永続化する
    pub fn clear(&mut self) -> Result<(), Error> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<(), Error> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::Json(format!("Failed to serialize history: {}", e)))?;
        self.fs.write(&self.file_path, &data)
    }
}
