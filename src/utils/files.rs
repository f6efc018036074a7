//! File streaming for topic resources and problem solutions

use std::io::ErrorKind;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    utils::validation::validate_relative_path,
};

/// A file ready to be streamed to the client
#[derive(Debug)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Read a stored file path relative to the files directory.
///
/// The stored path may not escape the base directory. A missing file is a
/// not-found error, matching the behavior of the record lookups.
pub async fn read_catalog_file(base: &Path, relative: &str) -> AppResult<FileContent> {
    validate_relative_path(relative).map_err(|e| AppError::Validation(e.to_string()))?;

    let path = base.join(relative);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("File not found: {relative}")));
        }
        Err(e) => {
            return Err(AppError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let content_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .to_string();

    Ok(FileContent {
        bytes,
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_catalog_file_with_mime() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), b"hello")
            .await
            .unwrap();

        let content = read_catalog_file(dir.path(), "notes.txt").await.unwrap();
        assert_eq!(content.bytes, b"hello");
        assert!(content.content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back_to_octet_stream() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("blob.xyz123"), b"data")
            .await
            .unwrap();

        let content = read_catalog_file(dir.path(), "blob.xyz123").await.unwrap();
        assert_eq!(content.content_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_catalog_file(dir.path(), "absent.pdf").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_escaping_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = read_catalog_file(dir.path(), "../outside.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
