//! エラー型

use wasm_bindgen::{JsCast, JsValue};

/// 起動時フェッチの失敗
///
/// 利用者には区別せず、元のメッセージをそのまま表示する。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchFailure {
    /// リクエスト組み立て失敗
    #[error("{0}")]
    Request(String),
    /// 通信失敗（fetchのreject）
    #[error("{0}")]
    Network(String),
    /// レスポンス本文の読み取り・JSON解析失敗
    #[error("{0}")]
    Body(String),
}

impl FetchFailure {
    pub fn request(value: JsValue) -> Self {
        FetchFailure::Request(js_error_message(&value))
    }

    pub fn network(value: JsValue) -> Self {
        FetchFailure::Network(js_error_message(&value))
    }

    pub fn body(value: JsValue) -> Self {
        FetchFailure::Body(js_error_message(&value))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::Request(_) => "request",
            FetchFailure::Network(_) => "network",
            FetchFailure::Body(_) => "body",
        }
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        FetchFailure::Body(err.to_string())
    }
}

/// JS例外からメッセージを取り出す（Error.message → 文字列 → デバッグ表記）
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
