//! Document translation endpoint
//!
//! Files are processed one after another in upload order. The first failure
//! aborts the rest of the batch and the caller gets a single 500: URLs of
//! documents that were already stored are not reported, and their records
//! are not rolled back.

use super::PROCESSING_FAILURE_DETAIL;
use crate::decoder::decode_file_request;
use crate::domain::{ApiResponse, FileTranslationRequest, GatewayEvent};
use crate::error::Result;
use crate::ports::{FilePersistencePort, RequestPersistencePort, TranslationPort};
use std::sync::Arc;

/// Tracks how far a batch got, for failure diagnostics
#[derive(Debug, Default)]
struct BatchProgress {
    file_index: usize,
    saved_records: Vec<String>,
}

/// Translates uploaded documents, records them and stores the results
pub struct FileHandler {
    records: Arc<dyn RequestPersistencePort>,
    files: Arc<dyn FilePersistencePort>,
    translator: Arc<dyn TranslationPort>,
}

impl FileHandler {
    pub fn new(
        records: Arc<dyn RequestPersistencePort>,
        files: Arc<dyn FilePersistencePort>,
        translator: Arc<dyn TranslationPort>,
    ) -> Self {
        Self {
            records,
            files,
            translator,
        }
    }

    /// Process one multipart translation event
    ///
    /// Every response, including errors, carries the CORS headers.
    pub async fn handle(&self, event: &GatewayEvent) -> ApiResponse {
        self.dispatch(event).await.with_cors()
    }

    async fn dispatch(&self, event: &GatewayEvent) -> ApiResponse {
        let request = match decode_file_request(event).await {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Invalid request: {}", e);
                return ApiResponse::error(e.status_code(), &e.to_string());
            }
        };

        let mut progress = BatchProgress::default();
        match self.translate_batch(&request, &mut progress).await {
            Ok(urls) => {
                log::info!(
                    "Translated {} file(s) to {}",
                    urls.len(),
                    request.lang
                );
                ApiResponse::urls(&urls)
            }
            Err(e) => {
                log::error!(
                    "Error translating file {} of {} to {} with {}: {} (records already saved: {:?})",
                    progress.file_index + 1,
                    request.files.len(),
                    request.lang,
                    self.translator.provider_name(),
                    e,
                    progress.saved_records
                );
                ApiResponse::error(500, PROCESSING_FAILURE_DETAIL)
            }
        }
    }

    async fn translate_batch(
        &self,
        request: &FileTranslationRequest,
        progress: &mut BatchProgress,
    ) -> Result<Vec<String>> {
        let mut urls = Vec::with_capacity(request.files.len());

        for (index, file) in request.files.iter().enumerate() {
            progress.file_index = index;

            let translated = self
                .translator
                .translate_document(&file.content, &file.content_type, &request.lang)
                .await?;

            let record = self.records.save(&file.content, &translated).await?;
            log::info!("Saved record with ID: {}", record.id);
            progress.saved_records.push(record.id);

            let url = self
                .files
                .save(&translated, file.extension.as_deref())
                .await?;
            urls.push(url);
        }

        Ok(urls)
    }
}
