// src/source/mod.rs
use crate::utils::error::SourceError;
use reqwest::header;
use std::path::PathBuf;
use std::time::Duration;

const SOURCE_USER_AGENT: &str = concat!("cv_renderer/", env!("CARGO_PKG_VERSION"));
const SOURCE_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where the CV text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(String),
    Local(PathBuf),
}

impl SourceLocation {
    /// `http://` and `https://` locations are remote, everything else is a path.
    pub fn classify(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(location.to_string())
        } else {
            Self::Local(PathBuf::from(location))
        }
    }
}

/// Creates a reqwest client for fetching remote CV files.
fn build_source_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(SOURCE_USER_AGENT)
        .timeout(Duration::from_secs(SOURCE_REQUEST_TIMEOUT_SECS))
        .build()
}

/// Loads the raw CV text from a local path or an http(s) URL.
pub async fn load_source(location: &str) -> Result<String, SourceError> {
    match SourceLocation::classify(location) {
        SourceLocation::Remote(url) => fetch_remote(&url).await,
        SourceLocation::Local(path) => read_local(path).await,
    }
}

async fn fetch_remote(url: &str) -> Result<String, SourceError> {
    let client = build_source_client()?;

    tracing::info!("Downloading CV text from: {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/plain,*/*")
        .send()
        .await?; // Propagates reqwest::Error as SourceError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }
        return Err(SourceError::Http(status));
    }

    let bytes = response.bytes().await?;
    let body = String::from_utf8(bytes.to_vec()).map_err(|_| SourceError::Encoding(url.to_string()))?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}

async fn read_local(path: PathBuf) -> Result<String, SourceError> {
    let shown = path.display().to_string();
    tracing::info!("Reading CV text from: {}", shown);

    let bytes = tokio::fs::read(&path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(shown.clone())
        } else {
            SourceError::Io {
                path: shown.clone(),
                source,
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|_| SourceError::Encoding(shown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn classifies_locations() {
        assert_eq!(
            SourceLocation::classify("https://example.com/information.txt"),
            SourceLocation::Remote("https://example.com/information.txt".to_string())
        );
        assert_eq!(
            SourceLocation::classify("HTTP://example.com/cv.txt"),
            SourceLocation::Remote("HTTP://example.com/cv.txt".to_string())
        );
        assert_eq!(
            SourceLocation::classify("data/information.txt"),
            SourceLocation::Local(PathBuf::from("data/information.txt"))
        );
    }

    #[test]
    fn reads_local_file_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[profile]\nName: Ada\n").unwrap();

        let text = tokio_test::block_on(load_source(file.path().to_str().unwrap())).unwrap();
        assert_eq!(text, "[profile]\nName: Ada\n");
    }

    #[test]
    fn missing_local_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("information.txt");

        let err = tokio_test::block_on(load_source(missing.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn non_utf8_file_is_an_encoding_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = tokio_test::block_on(load_source(file.path().to_str().unwrap())).unwrap_err();
        assert!(matches!(err, SourceError::Encoding(_)));
    }
}
