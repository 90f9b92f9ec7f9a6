//! JSON body decoding for the text endpoint

use crate::domain::{GatewayEvent, TextTranslationRequest};
use crate::error::{AppError, Result};
use serde_json::{Map, Value};

/// Decode `{"text": ..., "lang": ...}` from the event body
pub fn decode_text_request(event: &GatewayEvent) -> Result<TextTranslationRequest> {
    let body = event.body_bytes()?;

    let value: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::invalid("Invalid request"))?;
    let fields = value
        .as_object()
        .ok_or_else(|| AppError::invalid("Invalid request"))?;

    Ok(TextTranslationRequest {
        text: required_string(fields, "text")?,
        lang: required_string(fields, "lang")?,
    })
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String> {
    match fields.get(name) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(Value::String(_)) => Err(AppError::invalid(format!("{} must not be empty", name))),
        _ => Err(AppError::invalid(format!("{} must be a string", name))),
    }
}
