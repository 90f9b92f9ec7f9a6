/// File storage port trait
///
/// Defines the interface for the object store holding translated documents.
/// Implementation: local filesystem adapter
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for storing translated documents
#[async_trait]
pub trait FilePersistencePort: Send + Sync {
    /// Store `content` under a fresh key and return a URL the caller can fetch it from
    ///
    /// `extension`, when present, is appended to the generated key.
    async fn save(&self, content: &[u8], extension: Option<&str>) -> Result<String>;
}
