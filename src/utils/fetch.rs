//! 抽出データAPI連携

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

use crate::error::FetchFailure;
use crate::models::ExtractedData;
use crate::utils::log_trace::log_warn;

/// エンドポイントから抽出データを取得
///
/// HTTPステータスは見ない。本文がJSONとして読めればそのまま返す。
pub async fn fetch_extracted_data(
    endpoint: &str,
    signal: Option<&AbortSignal>,
) -> Result<ExtractedData, FetchFailure> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_signal(signal);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(FetchFailure::request)?;

    let window = web_sys::window()
        .ok_or_else(|| FetchFailure::Request("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(FetchFailure::network)?;

    let resp: Response = resp_value.dyn_into().map_err(FetchFailure::network)?;
    if !resp.ok() {
        log_warn("fetch", &format!("HTTP {} {}", resp.status(), resp.status_text()));
    }

    let text = JsFuture::from(resp.text().map_err(FetchFailure::body)?)
        .await
        .map_err(FetchFailure::body)?;

    parse_extracted_data(&text.as_string().unwrap_or_default())
}

/// レスポンス本文をJSONとして解析
pub fn parse_extracted_data(body: &str) -> Result<ExtractedData, FetchFailure> {
    Ok(ExtractedData(serde_json::from_str(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_object_body() {
        let data = parse_extracted_data(r#"{"pdf_url": "http://x/doc.pdf", "field": "v"}"#).unwrap();
        assert_eq!(data.0, json!({"pdf_url": "http://x/doc.pdf", "field": "v"}));
    }

    #[test]
    fn non_object_json_passes_through() {
        assert_eq!(parse_extracted_data("[1, 2]").unwrap().0, json!([1, 2]));
        assert_eq!(parse_extracted_data("null").unwrap().0, json!(null));
    }

    #[test]
    fn html_body_is_a_body_failure() {
        let err = parse_extracted_data("<!doctype html>").unwrap_err();
        assert!(matches!(err, FetchFailure::Body(_)));
    }

    #[test]
    fn empty_body_is_a_body_failure() {
        assert!(matches!(parse_extracted_data(""), Err(FetchFailure::Body(_))));
    }
}
