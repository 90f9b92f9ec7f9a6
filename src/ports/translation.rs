/// Translation service port trait
///
/// Defines the interface for machine translation engines.
/// Implementation: LibreTranslate-compatible HTTP API
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for translation services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate plain text into `lang`, detecting the source language
    async fn translate_text(&self, text: &str, lang: &str) -> Result<String>;

    /// Translate a whole document of the given MIME type into `lang`
    async fn translate_document(
        &self,
        content: &[u8],
        content_type: &str,
        lang: &str,
    ) -> Result<Vec<u8>>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
