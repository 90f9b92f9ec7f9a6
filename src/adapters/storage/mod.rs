//! Storage adapters
//!
//! - SQLite: translation records
//! - Local filesystem: translated documents

pub mod local_files;
pub mod sqlite;

pub use local_files::LocalFileStore;
pub use sqlite::SqliteRecordStore;
