/// Record persistence port traits
///
/// Every successful translation is saved as a `Record` for audit and history.
/// The adapter assigns the record id and timestamp; callers never supply them.
/// Implementation: SQLite adapter
use crate::domain::models::Record;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for persisting text translations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextPersistencePort: Send + Sync {
    /// Save an input text and its translation
    async fn save(&self, input: &str, output: &str) -> Result<Record>;
}

/// Port trait for persisting document translations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestPersistencePort: Send + Sync {
    /// Save an uploaded document and its translated bytes
    async fn save(&self, input: &[u8], output: &[u8]) -> Result<Record>;
}
