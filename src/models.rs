//! データ構造体モジュール

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

/// ドキュメント参照として扱うフィールド名
pub const DOCUMENT_LOCATOR_FIELD: &str = "pdf_url";

// ============================================
// 抽出データ
// ============================================

/// バックエンドから取得した抽出データ（形は検証せずそのまま保持）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedData(pub Value);

impl ExtractedData {
    /// `pdf_url` が空でない文字列ならそれを返す
    pub fn document_locator(&self) -> Option<&str> {
        self.0
            .get(DOCUMENT_LOCATOR_FIELD)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// JSの偽値にあたる値（null, false, 0, ""）
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// 2スペースインデントで整形したJSON
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for ExtractedData {
    fn from(value: Value) -> Self {
        ExtractedData(value)
    }
}

// ============================================
// ドキュメント参照
// ============================================

/// プレビューに渡すドキュメント参照
///
/// `Local` はブラウザセッション内のファイル参照（Object URL）を保持する。
/// ハンドルをdropすると参照が解放される。
#[derive(Debug)]
pub enum DocumentReference<H> {
    Remote(String),
    Local(H),
}

impl<H: Deref<Target = str>> DocumentReference<H> {
    pub fn url(&self) -> &str {
        match self {
            DocumentReference::Remote(url) => url.as_str(),
            DocumentReference::Local(handle) => &**handle,
        }
    }

    #[cfg(test)]
    pub fn is_local(&self) -> bool {
        matches!(self, DocumentReference::Local(_))
    }
}

// ============================================
// 取得状態
// ============================================

/// 起動時フェッチの状態（Initializing → Ready / Failed の一方向）
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Initializing,
    Ready(ExtractedData),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Initializing)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&ExtractedData> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn locator_requires_non_empty_string() {
        let data = ExtractedData::from(json!({"pdf_url": "http://x/doc.pdf"}));
        assert_eq!(data.document_locator(), Some("http://x/doc.pdf"));

        assert_eq!(ExtractedData::from(json!({"pdf_url": ""})).document_locator(), None);
        assert_eq!(ExtractedData::from(json!({"pdf_url": 3})).document_locator(), None);
        assert_eq!(ExtractedData::from(json!({"field": "v"})).document_locator(), None);
        assert_eq!(ExtractedData::from(json!(["pdf_url"])).document_locator(), None);
    }

    #[test]
    fn pretty_json_keeps_backend_key_order() {
        let data: ExtractedData =
            serde_json::from_str(r#"{"zeta": 1, "alpha": {"b": [1, 2], "a": null}}"#).unwrap();
        let expected = "{\n  \"zeta\": 1,\n  \"alpha\": {\n    \"b\": [\n      1,\n      2\n    ],\n    \"a\": null\n  }\n}";
        assert_eq!(data.to_pretty_json(), expected);
    }

    #[test]
    fn pretty_json_of_scalar() {
        assert_eq!(ExtractedData::from(json!("plain")).to_pretty_json(), "\"plain\"");
    }

    #[test]
    fn blank_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(ExtractedData::from(value.clone()).is_blank(), "{}", value);
        }
        for value in [json!({}), json!([]), json!(true), json!(1), json!("0")] {
            assert!(!ExtractedData::from(value.clone()).is_blank(), "{}", value);
        }
    }

    #[test]
    fn fetch_state_flags() {
        assert!(FetchState::default().is_loading());
        let failed = FetchState::Failed("boom".to_string());
        assert!(failed.is_settled());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);
    }
}
