//! Text translation endpoint

use super::PROCESSING_FAILURE_DETAIL;
use crate::decoder::decode_text_request;
use crate::domain::{ApiResponse, GatewayEvent, TextTranslationRequest};
use crate::error::Result;
use crate::ports::{TextPersistencePort, TranslationPort};
use std::sync::Arc;

/// Translates a JSON text request and records the result
pub struct TextHandler {
    records: Arc<dyn TextPersistencePort>,
    translator: Arc<dyn TranslationPort>,
}

impl TextHandler {
    pub fn new(
        records: Arc<dyn TextPersistencePort>,
        translator: Arc<dyn TranslationPort>,
    ) -> Self {
        Self {
            records,
            translator,
        }
    }

    /// Process one text translation event
    pub async fn handle(&self, event: &GatewayEvent) -> ApiResponse {
        let request = match decode_text_request(event) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Invalid request: {}", e);
                return ApiResponse::error(e.status_code(), &e.to_string());
            }
        };

        match self.translate_and_save(&request).await {
            Ok(translated) => ApiResponse::result(&translated),
            Err(e) => {
                log::error!(
                    "Error translating text to {} with {}: {}",
                    request.lang,
                    self.translator.provider_name(),
                    e
                );
                ApiResponse::error(500, PROCESSING_FAILURE_DETAIL)
            }
        }
    }

    async fn translate_and_save(&self, request: &TextTranslationRequest) -> Result<String> {
        let translated = self
            .translator
            .translate_text(&request.text, &request.lang)
            .await?;

        let record = self.records.save(&request.text, &translated).await?;
        log::info!("Saved record with ID: {}", record.id);

        Ok(translated)
    }
}
