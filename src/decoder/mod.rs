//! Request decoding
//!
//! Turns a raw `GatewayEvent` into a validated, typed request. Decoding is
//! pure: it never touches a port, so every validation failure is reported
//! before any external call is made.

pub mod multipart;
pub mod text;

#[cfg(test)]
pub mod fixtures;

pub use multipart::decode_file_request;
pub use text::decode_text_request;
