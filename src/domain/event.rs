//! Wire shapes of the serverless endpoints
//!
//! `GatewayEvent` is what an endpoint receives, `ApiResponse` is the
//! envelope it returns. Both mirror the API gateway proxy format, so the
//! status code travels as a string and the body as a JSON-encoded string.

use crate::error::{AppError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io;

/// Headers attached to every file endpoint response so browsers can post forms directly
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST"),
];

/// Incoming request as delivered by the gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    /// Event carrying a plain (not base64-encoded) body
    #[cfg(test)]
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Adds a header (builder pattern)
    #[cfg(test)]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Looks up a header by name, ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body bytes, base64-decoding them when the event is flagged as encoded
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| AppError::invalid("Invalid request"))?;

        if self.is_base64_encoded {
            STANDARD
                .decode(body.trim())
                .map_err(|_| AppError::invalid("body is not valid base64"))
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }
}

/// Response envelope returned by both endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    pub body: String,
}

impl ApiResponse {
    fn new(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status_code: status.to_string(),
            headers: None,
            body: to_json_string(body),
        }
    }

    /// `200` with `{"result": <text>}`
    pub fn result(text: &str) -> Self {
        Self::new(200, &serde_json::json!({ "result": text }))
    }

    /// `200` with `{"urls": [...]}`
    pub fn urls(urls: &[String]) -> Self {
        Self::new(200, &serde_json::json!({ "urls": urls }))
    }

    /// Error envelope with `{"detail": <message>}`
    pub fn error(status: u16, detail: &str) -> Self {
        Self::new(status, &serde_json::json!({ "detail": detail }))
    }

    /// Attaches the permissive CORS headers (builder pattern)
    pub fn with_cors(mut self) -> Self {
        let headers = self.headers.get_or_insert_with(BTreeMap::new);
        for (name, value) in CORS_HEADERS {
            headers.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Numeric status, or 500 if the envelope carries something unparseable
    pub fn status(&self) -> u16 {
        self.status_code.parse().unwrap_or(500)
    }
}

/// Writes `", "` between items and `": "` between keys and values
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_json_string(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}
