//! Key-value local store
//!
//! Stores one string value per key as a file under a root directory,
//! mirroring a browser's localStorage: values are opaque strings (usually
//! JSON), reads of missing keys yield nothing, and read failures are
//! recovered by falling back to "nothing stored".

use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Per-key string storage backed by files
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Local store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Read the value stored under a key. Missing keys and unreadable
    /// files both yield None; the latter is logged.
    pub async fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key);

        match fs::read_to_string(&path).await {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read stored key {}: {}", key, e);
                None
            }
        }
    }

    /// Store a value under a key, replacing any previous value
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Stored key: {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Remove a key; removing an absent key is not an error
    pub async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).await?;
        tracing::debug!("Removed key: {}", key);
        Ok(())
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}
