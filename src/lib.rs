// src/lib.rs
//! Renders a résumé from a hand-edited, section-based text file.
//!
//! The pipeline is `source::load_source` -> `cv::parse_cv` ->
//! `render::render_document` -> `storage::StorageManager`.

pub mod cv;
pub mod render;
pub mod source;
pub mod storage;
pub mod utils;

pub use cv::{parse_cv, CvDocument};
pub use utils::AppError;
