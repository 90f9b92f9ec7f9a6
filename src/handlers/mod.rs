//! Endpoint orchestrators
//!
//! Each handler decodes one `GatewayEvent`, drives the ports through a fixed
//! translate, persist, store sequence and always answers with an
//! `ApiResponse`. Validation failures become 400 with their own message;
//! anything that fails once a port has been called becomes a 500 whose
//! detail never reveals the cause.

pub mod file;
pub mod text;

pub use file::FileHandler;
pub use text::TextHandler;

/// Detail returned for every processing failure
pub const PROCESSING_FAILURE_DETAIL: &str = "An error was encountered";
