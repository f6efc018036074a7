//! Flat-file JSON document access
//!
//! Each entity collection persists as one pretty-printed JSON array. Reads
//! of an absent document yield an empty collection; writes replace the whole
//! document (last write wins, no locking — the service assumes a single
//! user).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, AppResult};

/// Handle on the directory holding the catalog documents
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The directory holding the documents
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it does not exist yet
    pub async fn ensure_data_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    /// Load a document as a vector of records; an absent file is an empty
    /// collection
    pub async fn load<T: DeserializeOwned>(&self, document: &str) -> AppResult<Vec<T>> {
        let path = self.data_dir.join(document);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Storage(format!("malformed document {document}: {e}")))
    }

    /// Replace a document with the given records.
    ///
    /// The document is written to a temporary sibling and renamed into
    /// place, so readers never observe a partial write.
    pub async fn save<T: Serialize>(&self, document: &str, records: &[T]) -> AppResult<()> {
        let path = self.data_dir.join(document);
        let tmp = path.with_extension("json.tmp");

        let body = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        rank: i64,
    }

    fn record(name: &str, rank: i64) -> Record {
        Record {
            name: name.to_string(),
            rank,
        }
    }

    #[tokio::test]
    async fn test_load_absent_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        let records: Vec<Record> = store.load("missing.json").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        let records = vec![record("a", 1), record("b", 2)];
        store.save("records.json", &records).await.unwrap();

        let loaded: Vec<Record> = store.load("records.json").await.unwrap();
        assert_eq!(loaded, records);

        // no temporary file left behind
        assert!(!dir.path().join("records.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        store
            .save("records.json", &[record("a", 1), record("b", 2)])
            .await
            .unwrap();
        store.save("records.json", &[record("c", 3)]).await.unwrap();

        let loaded: Vec<Record> = store.load("records.json").await.unwrap();
        assert_eq!(loaded, vec![record("c", 3)]);
    }

    #[tokio::test]
    async fn test_malformed_document_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());

        tokio::fs::write(dir.path().join("records.json"), b"not json")
            .await
            .unwrap();

        let err = store.load::<Record>("records.json").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
