//! テキスト変換レジストリ
//!
//! name -> 純粋関数の固定マップ。プロセス起動時に一度だけ構築し、以後は不変。
//! 変換はすべて副作用なし。失敗しうるのはデコード・パース系のみ。

use crate::error::Error;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;

/// 変換エラー（ドメイン層）
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransformError {
    #[error("unknown transformation: {0}")]
    NotFound(String),
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("failed to decode base64: {0}")]
    InvalidBase64(String),
    #[error("failed to decode URL: {0}")]
    InvalidUrl(String),
}

impl From<TransformError> for Error {
    fn from(e: TransformError) -> Self {
        Error::Validation(e.to_string())
    }
}

type TransformFn = fn(&str) -> Result<String, TransformError>;

/// 変換名で解決するレジストリ
pub struct TransformRegistry {
    transforms: BTreeMap<&'static str, TransformFn>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        let mut transforms: BTreeMap<&'static str, TransformFn> = BTreeMap::new();
        transforms.insert("json", format_json);
        transforms.insert("json-minify", minify_json);
        transforms.insert("trim", trim);
        transforms.insert("upper", upper);
        transforms.insert("lower", lower);
        transforms.insert("title", title);
        transforms.insert("base64", base64_encode);
        transforms.insert("base64d", base64_decode);
        transforms.insert("url", url_encode);
        transforms.insert("urld", url_decode);
        transforms.insert("reverse", reverse);
        Self { transforms }
    }

    /// 名前で変換を適用する
    pub fn apply(&self, name: &str, text: &str) -> Result<String, TransformError> {
        let transform = self
            .transforms
            .get(name)
            .ok_or_else(|| TransformError::NotFound(name.to_string()))?;
        transform(text)
    }

    /// 登録済みの変換名一覧
    pub fn list(&self) -> Vec<&'static str> {
        self.transforms.keys().copied().collect()
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON をパースして 2 スペースインデントで整形する
fn format_json(text: &str) -> Result<String, TransformError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| TransformError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| TransformError::InvalidJson(e.to_string()))
}

/// JSON をパースして余分な空白なしで再出力する
fn minify_json(text: &str) -> Result<String, TransformError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| TransformError::InvalidJson(e.to_string()))?;
    serde_json::to_string(&value).map_err(|e| TransformError::InvalidJson(e.to_string()))
}

fn trim(text: &str) -> Result<String, TransformError> {
    Ok(text.trim().to_string())
}

fn upper(text: &str) -> Result<String, TransformError> {
    Ok(text.to_uppercase())
}

fn lower(text: &str) -> Result<String, TransformError> {
    Ok(text.to_lowercase())
}

/// 各語の先頭文字を大文字、残りを小文字にする（語境界は UAX #29）
fn title(text: &str) -> Result<String, TransformError> {
    let mut out = String::with_capacity(text.len());
    for word in text.split_word_bounds() {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => {
                out.extend(first.to_uppercase());
                for c in chars {
                    out.extend(c.to_lowercase());
                }
            }
            Some(first) => {
                out.push(first);
                out.push_str(chars.as_str());
            }
            None => {}
        }
    }
    Ok(out)
}

fn base64_encode(text: &str) -> Result<String, TransformError> {
    Ok(STANDARD.encode(text.as_bytes()))
}

fn base64_decode(text: &str) -> Result<String, TransformError> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| TransformError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| TransformError::InvalidBase64(format!("decoded bytes are not valid UTF-8: {}", e)))
}

/// クエリ文字列形式のエンコード（スペースは `+`）
fn url_encode(text: &str) -> Result<String, TransformError> {
    Ok(urlencoding::encode(text).replace("%20", "+"))
}

/// クエリ文字列形式のデコード。不正・途切れたパーセントシーケンスはエラー。
fn url_decode(text: &str) -> Result<String, TransformError> {
    let raw = text.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            b'%' => {
                if i + 2 >= raw.len() {
                    return Err(TransformError::InvalidUrl(format!(
                        "truncated percent sequence at byte {}",
                        i
                    )));
                }
                let hi = hex_value(raw[i + 1]);
                let lo = hex_value(raw[i + 2]);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        bytes.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        return Err(TransformError::InvalidUrl(format!(
                            "invalid percent sequence '%{}{}' at byte {}",
                            raw[i + 1] as char,
                            raw[i + 2] as char,
                            i
                        )));
                    }
                }
            }
            b => {
                bytes.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(bytes)
        .map_err(|e| TransformError::InvalidUrl(format!("decoded bytes are not valid UTF-8: {}", e)))
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Unicode コードポイント列を逆順にする
fn reverse(text: &str) -> Result<String, TransformError> {
    Ok(text.chars().rev().collect())
}
