/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod event;
pub mod models;

pub use event::{ApiResponse, GatewayEvent, CORS_HEADERS};
pub use models::{FilePart, FileTranslationRequest, TextTranslationRequest};
