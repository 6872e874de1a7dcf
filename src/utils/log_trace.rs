//! 時系列トレースログ
//! フェッチ・アップロードなどのイベントを記録し、コンソールにも出力する

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "fetch", "upload", "config"
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        // コンソールにも出力
        let line = format!("[{}] {}", category, message);
        match level {
            "error" => web_sys::console::error_1(&line.into()),
            "warn" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        self.push(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
    }

    /// 上限を超えたら古いものから捨てる
    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        serde_json::to_string_pretty(&self.get_logs()).unwrap_or_else(|_| "[]".to_string())
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("warn", category, message, None));
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message, Some(data)));
}

/// 開発者ツールからトレースを確認する
#[wasm_bindgen(js_name = dumpLogTrace)]
pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            level: "info".to_string(),
            category: "fetch".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut trace = LogTrace::with_capacity(2);
        trace.push(entry("a"));
        trace.push(entry("b"));
        trace.push(entry("c"));

        let messages: Vec<String> = trace.get_logs().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut trace = LogTrace::with_capacity(0);
        trace.push(entry("a"));
        assert!(trace.get_logs().is_empty());
    }

    #[test]
    fn logs_serialize_as_json_array() {
        let mut trace = LogTrace::with_capacity(4);
        trace.push(entry("started"));
        let parsed: Vec<LogEntry> = serde_json::from_str(&trace.get_logs_json()).unwrap();
        assert_eq!(parsed, vec![entry("started")]);
    }
}
