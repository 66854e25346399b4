// src/utils/error.rs
use thiserror::Error;

// Errors raised while obtaining the raw CV text. The parser itself never fails.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error, 403 Forbidden

    #[error("CV source not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CV source {0} is not valid UTF-8 text")]
    Encoding(String),
}

impl SourceError {
    /// Message shown to the reader of the rendered error page.
    pub fn user_message(&self) -> String {
        format!("Failed to load CV data: {}", self)
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Loading CV source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefixes_the_failure() {
        let err = SourceError::NotFound("information.txt".to_string());
        assert_eq!(
            err.user_message(),
            "Failed to load CV data: CV source not found: information.txt"
        );
    }

    #[test]
    fn source_errors_convert_into_app_errors() {
        let err: AppError = SourceError::Encoding("cv.txt".to_string()).into();
        assert!(matches!(err, AppError::Source(SourceError::Encoding(_))));
    }

    #[test]
    fn io_failures_reach_app_errors_through_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AppError = StorageError::from(io).into();
        assert!(matches!(err, AppError::Storage(StorageError::IoError(_))));
    }
}
