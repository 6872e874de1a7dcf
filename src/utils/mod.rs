//! ユーティリティモジュール

pub mod config;
pub mod fetch;
pub mod log_trace;
