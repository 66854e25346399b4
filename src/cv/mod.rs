// src/cv/mod.rs
pub mod models;
pub mod parser;

// Re-export key parsing types for convenience
pub use models::{Certification, CvDocument, ExperienceEntry, LanguageEntry};
pub use parser::{parse_cv, Section};
