//! LibreTranslate service adapter
//!
//! Implements the TranslationPort for LibreTranslate-compatible APIs.
//! Text goes through `POST /translate`; documents are uploaded to
//! `POST /translate_file` and the translated file is then downloaded from
//! the URL the service answers with.

use crate::error::{AppError, Result};
use crate::ports::translation::TranslationPort;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source language sent with every request; the service detects it
const SOURCE_AUTO: &str = "auto";

/// LibreTranslate service implementation
pub struct LibreTranslateService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateFileResponse {
    translated_file_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl LibreTranslateService {
    /// Create a new service for the API at `base_url`
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    /// Check if the service has somewhere to send requests
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-success response into a translation error, keeping the service's message
    async fn failure(context: &str, response: Response) -> AppError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&error_text)
            .map(|e| e.error)
            .unwrap_or(error_text);
        AppError::Translation(format!("{} failed ({}): {}", context, status, message))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("Download request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure("Download", response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Translation(format!("Failed to read translated file: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

/// File extension LibreTranslate uses to pick a document parser
fn extension_for(content_type: &str) -> &'static str {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "text/html" => "html",
        "text/markdown" => "md",
        "application/pdf" => "pdf",
        "application/epub+zip" => "epub",
        "application/vnd.oasis.opendocument.text" => "odt",
        "application/vnd.oasis.opendocument.presentation" => "odp",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => "pptx",
        _ => "txt",
    }
}

#[async_trait]
impl TranslationPort for LibreTranslateService {
    async fn translate_text(&self, text: &str, lang: &str) -> Result<String> {
        let request_body = TranslateRequest {
            q: text,
            source: SOURCE_AUTO,
            target: lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        log::info!("Translating {} characters to {}", text.len(), lang);

        let response = self
            .client
            .post(self.endpoint("translate"))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("Translate request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure("Translate", response).await);
        }

        let translate_response: TranslateResponse = response.json().await.map_err(|e| {
            AppError::Translation(format!("Failed to parse translate response: {}", e))
        })?;

        Ok(translate_response.translated_text)
    }

    async fn translate_document(
        &self,
        content: &[u8],
        content_type: &str,
        lang: &str,
    ) -> Result<Vec<u8>> {
        let file_name = format!("document.{}", extension_for(content_type));
        let part = Part::bytes(content.to_vec())
            .file_name(file_name)
            .mime_str(content_type)?;

        let mut form = Form::new()
            .part("file", part)
            .text("source", SOURCE_AUTO)
            .text("target", lang.to_string());
        if let Some(api_key) = &self.api_key {
            form = form.text("api_key", api_key.clone());
        }

        log::info!(
            "Translating {} byte {} document to {}",
            content.len(),
            content_type,
            lang
        );

        let response = self
            .client
            .post(self.endpoint("translate_file"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("File upload failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failure("File translation", response).await);
        }

        let file_response: TranslateFileResponse = response.json().await.map_err(|e| {
            AppError::Translation(format!("Failed to parse file translation response: {}", e))
        })?;

        self.download(&file_response.translated_file_url).await
    }

    fn provider_name(&self) -> &str {
        "libretranslate"
    }
}
