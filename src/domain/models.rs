/// Domain models for Polyglot Relay
///
/// These models represent core business entities and are transport-agnostic.
use serde::{Deserialize, Serialize};

/// Content carried by a record: either translated text or a raw document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

impl Payload {
    /// Storage tag for this payload kind
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Binary(_) => "binary",
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Binary(bytes) => bytes,
        }
    }

    /// Rebuilds a payload from its storage tag and raw bytes
    ///
    /// Returns `None` for an unknown tag or a text payload that is not UTF-8.
    pub fn from_parts(kind: &str, bytes: Vec<u8>) -> Option<Self> {
        match kind {
            "text" => String::from_utf8(bytes).ok().map(Payload::Text),
            "binary" => Some(Payload::Binary(bytes)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Text(text) => write!(f, "{}", text),
            Payload::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// One persisted translate-and-save transaction
///
/// Records are created by a persistence adapter, which also assigns `id`
/// and `created_at`. They are never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub input: Payload,
    pub output: Payload,
    pub created_at: i64, // Unix timestamp
}

/// Validated request for the text endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTranslationRequest {
    pub text: String,
    pub lang: String,
}

/// One uploaded document taken from a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub content: Vec<u8>,
    pub content_type: String,
    pub extension: Option<String>,
}

/// Validated request for the file endpoint
///
/// `files` keeps the order in which the parts appeared in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTranslationRequest {
    pub files: Vec<FilePart>,
    pub lang: String,
}
