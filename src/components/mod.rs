//! UIコンポーネントモジュール

pub mod data_pane;
pub mod document_preview;
pub mod dropzone;

pub use data_pane::ExtractedDataPane;
pub use document_preview::DocumentPreview;
pub use dropzone::UploadDropzone;
