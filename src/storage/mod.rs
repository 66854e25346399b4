// src/storage/mod.rs
use crate::cv::CvDocument;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes a rendered page to `<stem>.html`
    pub fn save_html(&self, stem: &str, html: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.html", stem));
        fs::write(&file_path, html).map_err(StorageError::IoError)?;

        tracing::info!("Saved rendered CV to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes the parsed document as pretty JSON to `<stem>.json`
    pub fn save_document(&self, stem: &str, doc: &CvDocument) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.json", stem));

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved CV document to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the run in JSON format to `<stem>_meta.json`
    pub fn save_metadata(&self, stem: &str, source: &str, doc: &CvDocument) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "source": source,
            "name": doc.profile_field("name"),
            "is_empty": doc.is_empty(),
            "counts": {
                "profile": doc.profile.len(),
                "about_chars": doc.about.chars().count(),
                "experience": doc.experience.len(),
                "skills": doc.skills.len(),
                "education": doc.education.len(),
                "certifications": doc.certifications.len(),
                "languages": doc.languages.len(),
            },
            "rendered_at": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}
