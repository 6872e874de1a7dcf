//! ビューワ設定
//!
//! エンドポイントは LocalStorage の上書き値 → ビルド時の `EXTRACTED_DATA_ENDPOINT`
//! → 既定値の順で解決する。

use wasm_bindgen::prelude::*;

use crate::utils::log_trace::{log_info, log_warn};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/get-extracted-data";
const ENDPOINT_KEY: &str = "extraction_viewer_endpoint";

/// ビューワに注入する設定
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub extracted_data_endpoint: String,
    /// アップロード欄を表示するか（現行ビルドでは非表示）
    pub upload_enabled: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            extracted_data_endpoint: DEFAULT_ENDPOINT.to_string(),
            upload_enabled: false,
        }
    }
}

impl ViewerConfig {
    /// 保存済みの上書き値とビルド時の値から設定を組み立てる
    pub fn load() -> Self {
        let config = ViewerConfig {
            extracted_data_endpoint: resolve_endpoint(
                get_endpoint_override(),
                option_env!("EXTRACTED_DATA_ENDPOINT"),
            ),
            upload_enabled: parse_flag(option_env!("UPLOAD_ENABLED")),
        };
        log_info("config", &format!("endpoint: {}", config.extracted_data_endpoint));
        config
    }
}

pub fn resolve_endpoint(stored: Option<String>, build_time: Option<&str>) -> String {
    normalize_override(stored)
        .or_else(|| {
            build_time
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// 空白だけの値は未設定として扱う
pub fn normalize_override(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// エンドポイントの上書き値を保存（空なら削除）
#[wasm_bindgen(js_name = setEndpointOverride)]
pub fn save_endpoint_override(url: &str) {
    let Some(url) = normalize_override(Some(url.to_string())) else {
        clear_endpoint_override();
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(ENDPOINT_KEY, &url).is_err() {
                log_warn("config", "エンドポイントを保存できませんでした");
            }
            return;
        }
    }
    log_warn("config", "LocalStorageが利用できません");
}

/// エンドポイントの上書き値を取得（ストレージが使えなければ None）
pub fn get_endpoint_override() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    normalize_override(storage.get_item(ENDPOINT_KEY).ok()?)
}

/// エンドポイントの上書き値をクリア
#[wasm_bindgen(js_name = clearEndpointOverride)]
pub fn clear_endpoint_override() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(ENDPOINT_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn stored_override_wins() {
        let endpoint = resolve_endpoint(Some("http://stored/data".to_string()), Some("http://build/data"));
        assert_eq!(endpoint, "http://stored/data");
    }

    #[test]
    fn build_time_value_used_without_override() {
        assert_eq!(resolve_endpoint(None, Some(" http://build/data ")), "http://build/data");
        assert_eq!(resolve_endpoint(Some("   ".to_string()), Some("http://build/data")), "http://build/data");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_endpoint(None, None), DEFAULT_ENDPOINT);
        assert_eq!(resolve_endpoint(None, Some("")), DEFAULT_ENDPOINT);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  \t "), None)]
    #[case(Some(" http://stored/data "), Some("http://stored/data"))]
    fn blank_override_is_absent(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            normalize_override(value.map(str::to_string)),
            expected.map(str::to_string)
        );
    }

    #[test]
    fn default_config_hides_upload() {
        let config = ViewerConfig::default();
        assert!(!config.upload_enabled);
        assert_eq!(config.extracted_data_endpoint, DEFAULT_ENDPOINT);
    }

    #[rstest]
    #[case(Some("1"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some(" on "), true)]
    #[case(Some("0"), false)]
    #[case(Some("false"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn flag_parsing(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_flag(value), expected);
    }
}
