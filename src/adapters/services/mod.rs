//! External service adapters
//!
//! This module contains adapters for external APIs:
//! - LibreTranslate-compatible machine translation

pub mod libretranslate;

pub use libretranslate::LibreTranslateService;
