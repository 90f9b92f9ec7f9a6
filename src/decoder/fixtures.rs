//! Builders for multipart test requests

use crate::domain::GatewayEvent;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const BOUNDARY: &str = "relay-test-boundary";

/// One raw part of a multipart body
pub struct Part {
    pub disposition: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

/// A file part with a filename and its own content-type
pub fn file(field: &str, file_name: &str, content_type: &str, content: &[u8]) -> Part {
    Part {
        disposition: format!("form-data; name=\"{}\"; filename=\"{}\"", field, file_name),
        content_type: Some(content_type.to_string()),
        content: content.to_vec(),
    }
}

/// A plain form field
pub fn field(name: &str, value: &str) -> Part {
    Part {
        disposition: format!("form-data; name=\"{}\"", name),
        content_type: None,
        content: value.as_bytes().to_vec(),
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(format!("Content-Disposition: {}\r\n", part.disposition).as_bytes());
        if let Some(content_type) = &part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Base64-encoded multipart event, the way the gateway delivers binary bodies
pub fn multipart_event(parts: &[Part]) -> GatewayEvent {
    GatewayEvent {
        body: Some(STANDARD.encode(multipart_body(parts))),
        is_base64_encoded: true,
        ..GatewayEvent::default()
    }
    .with_header("content-type", multipart_content_type())
}
