//! ビューモジュール

pub mod extraction_viewer;
pub mod viewer_model;

pub use extraction_viewer::ExtractionViewer;
