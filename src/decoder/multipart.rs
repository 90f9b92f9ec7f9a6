//! Multipart body decoding for the file endpoint
//!
//! Parts are told apart by their `Content-Disposition` parameters, looked up
//! by name: a part with a non-empty `filename` is a document, a part named
//! `lang` carries the target language, anything else is skipped.

use crate::domain::{FilePart, FileTranslationRequest, GatewayEvent};
use crate::error::{AppError, Result};
use bytes::Bytes;

/// Form field holding the target language code
const LANG_FIELD: &str = "lang";

/// Decode documents and the target language from a multipart/form-data event
pub async fn decode_file_request(event: &GatewayEvent) -> Result<FileTranslationRequest> {
    let content_type = event
        .header("content-type")
        .ok_or_else(|| AppError::invalid("content-type header must be provided"))?;
    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| AppError::invalid("content-type must describe a multipart boundary"))?;

    let body = event.body_bytes()?;
    let stream =
        futures_util::stream::once(async move { Ok::<_, std::io::Error>(Bytes::from(body)) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut files = Vec::new();
    let mut lang = String::new();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        if let Some(file_name) = file_name {
            let content_type = field
                .headers()
                .get("content-type")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::invalid(format!("file {} must declare a content-type", file_name))
                })?;
            let content = field.bytes().await.map_err(malformed)?;

            log::debug!(
                "Decoded file part {} ({}, {} bytes)",
                file_name,
                content_type,
                content.len()
            );
            files.push(FilePart {
                content: content.to_vec(),
                content_type,
                extension: file_extension(&file_name),
            });
        } else if field.name() == Some(LANG_FIELD) {
            let content = field.bytes().await.map_err(malformed)?;
            lang = String::from_utf8(content.to_vec())
                .map_err(|_| AppError::invalid("lang must be a string"))?;
        }
    }

    if files.is_empty() {
        return Err(AppError::invalid("files must be provided"));
    }

    if lang.is_empty() {
        return Err(AppError::invalid("lang must be a string"));
    }

    Ok(FileTranslationRequest { files, lang })
}

/// Extension of an uploaded file name
///
/// Only names with exactly one dot have an extension: `"a.txt"` gives
/// `"txt"`, while `"a.b.txt"` and `"README"` give none. Clients depend on
/// this rule, so it must not be widened to "suffix after the last dot".
pub fn file_extension(file_name: &str) -> Option<String> {
    let mut segments = file_name.split('.');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(extension), None) if !extension.is_empty() => Some(extension.to_string()),
        _ => None,
    }
}

fn malformed(e: multer::Error) -> AppError {
    AppError::invalid(format!("malformed multipart body: {}", e))
}
