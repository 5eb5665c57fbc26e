//! 履歴エントリ（作成後は不変）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// クリップボード履歴の 1 エントリ
///
/// `timestamp` は RFC3339 で永続化される（chrono の serde 実装）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_roundtrip_rfc3339() {
        let entry = HistoryEntry {
            content: "hello".to_string(),
            timestamp: "2026-02-07T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"content\":\"hello\""));
        assert!(json.contains("2026-02-07T12:00:00"));

        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
