// src/render/mod.rs
pub mod html;

pub use html::{render_document, render_error_page, RenderOptions};
