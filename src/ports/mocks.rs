//! Mock implementations for testing

use crate::domain::models::{Payload, Record};
use crate::error::{AppError, Result};
use crate::ports::file_storage::FilePersistencePort;
use crate::ports::persistence::{RequestPersistencePort, TextPersistencePort};
use crate::ports::translation::TranslationPort;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One call made against `RecordingTranslator::translate_document`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCall {
    pub content: Vec<u8>,
    pub content_type: String,
    pub lang: String,
}

/// Translator that appends `-<lang>` to its input and remembers every call
#[derive(Clone, Default)]
pub struct RecordingTranslator {
    text_calls: Arc<Mutex<Vec<(String, String)>>>,
    document_calls: Arc<Mutex<Vec<DocumentCall>>>,
    fail_document_at: Option<usize>,
    fail_text: bool,
}

impl RecordingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the document call with this zero-based index fail
    pub fn failing_document_at(mut self, index: usize) -> Self {
        self.fail_document_at = Some(index);
        self
    }

    /// Make every text call fail
    pub fn failing_text(mut self) -> Self {
        self.fail_text = true;
        self
    }

    pub fn text_calls(&self) -> Vec<(String, String)> {
        self.text_calls.lock().unwrap().clone()
    }

    pub fn document_calls(&self) -> Vec<DocumentCall> {
        self.document_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationPort for RecordingTranslator {
    async fn translate_text(&self, text: &str, lang: &str) -> Result<String> {
        self.text_calls
            .lock()
            .unwrap()
            .push((text.to_string(), lang.to_string()));
        if self.fail_text {
            return Err(AppError::Translation("engine unavailable".to_string()));
        }
        Ok(format!("{}-{}", text, lang))
    }

    async fn translate_document(
        &self,
        content: &[u8],
        content_type: &str,
        lang: &str,
    ) -> Result<Vec<u8>> {
        let index = {
            let mut calls = self.document_calls.lock().unwrap();
            calls.push(DocumentCall {
                content: content.to_vec(),
                content_type: content_type.to_string(),
                lang: lang.to_string(),
            });
            calls.len() - 1
        };

        if self.fail_document_at == Some(index) {
            return Err(AppError::Translation(format!(
                "unsupported document #{}",
                index
            )));
        }

        let mut translated = content.to_vec();
        translated.extend_from_slice(format!("-{}", lang).as_bytes());
        Ok(translated)
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// In-memory record store implementing both persistence ports
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<Mutex<Vec<Record>>>,
    fail: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    fn insert(&self, input: Payload, output: Payload) -> Result<Record> {
        if self.fail {
            return Err(AppError::Storage("record table unavailable".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        let record = Record {
            id: format!("record-{}", records.len() + 1),
            input,
            output,
            created_at: chrono::Utc::now().timestamp(),
        };
        records.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl TextPersistencePort for MemoryRecordStore {
    async fn save(&self, input: &str, output: &str) -> Result<Record> {
        self.insert(
            Payload::Text(input.to_string()),
            Payload::Text(output.to_string()),
        )
    }
}

#[async_trait]
impl RequestPersistencePort for MemoryRecordStore {
    async fn save(&self, input: &[u8], output: &[u8]) -> Result<Record> {
        self.insert(Payload::Binary(input.to_vec()), Payload::Binary(output.to_vec()))
    }
}

/// In-memory object store handing out preset or generated URLs
#[derive(Clone, Default)]
pub struct MemoryFileStore {
    saved: Arc<Mutex<Vec<(Vec<u8>, Option<String>)>>>,
    preset_urls: Arc<Mutex<VecDeque<String>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these URLs, in order, before falling back to generated ones
    pub fn with_urls(urls: &[&str]) -> Self {
        let store = Self::default();
        store
            .preset_urls
            .lock()
            .unwrap()
            .extend(urls.iter().map(|u| u.to_string()));
        store
    }

    pub fn saved(&self) -> Vec<(Vec<u8>, Option<String>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl FilePersistencePort for MemoryFileStore {
    async fn save(&self, content: &[u8], extension: Option<&str>) -> Result<String> {
        let mut saved = self.saved.lock().unwrap();
        saved.push((content.to_vec(), extension.map(str::to_string)));

        if let Some(url) = self.preset_urls.lock().unwrap().pop_front() {
            return Ok(url);
        }
        Ok(match extension {
            Some(ext) => format!("https://files.test/{}.{}", saved.len(), ext),
            None => format!("https://files.test/{}", saved.len()),
        })
    }
}
