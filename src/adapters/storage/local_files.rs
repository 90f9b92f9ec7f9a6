/// Local filesystem object store adapter
///
/// Implements FilePersistencePort by writing each translated document to a
/// directory under a random key. The returned URL is the configured public
/// base followed by the key; the HTTP front serves keys back via `read`.
use crate::error::{AppError, Result};
use crate::ports::file_storage::FilePersistencePort;
use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

/// Directory-backed object store
pub struct LocalFileStore {
    root: PathBuf,
    public_url: String,
}

impl LocalFileStore {
    /// Create a store rooted at `root`, creating the directory if needed
    pub fn new(root: PathBuf, public_url: impl Into<String>) -> Result<Self> {
        std::fs::create_dir_all(&root)?;

        Ok(Self {
            root,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Read a stored document back by key
    pub async fn read(&self, key: &str) -> Result<Vec<u8>> {
        if !is_valid_key(key) {
            return Err(AppError::NotFound(key.to_string()));
        }

        match tokio::fs::read(self.root.join(key)).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(key.to_string()))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

/// Keys are flat file names: alphanumerics plus an optional single extension
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key.matches('.').count() <= 1
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '.')
}

#[async_trait]
impl FilePersistencePort for LocalFileStore {
    async fn save(&self, content: &[u8], extension: Option<&str>) -> Result<String> {
        let stem = Uuid::new_v4().simple().to_string();
        let key = match extension {
            Some(ext) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!("{}.{}", stem, ext)
            }
            Some(ext) => {
                log::warn!("Dropping unsafe file extension {:?}", ext);
                stem
            }
            None => stem,
        };

        tokio::fs::write(self.root.join(&key), content)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", key, e)))?;

        log::debug!("Stored {} bytes as {}", content.len(), key);
        Ok(self.url_for(&key))
    }
}
