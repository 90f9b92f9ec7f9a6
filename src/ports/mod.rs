/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod file_storage;
pub mod persistence;
pub mod translation;

#[cfg(test)]
pub mod mocks;

pub use file_storage::FilePersistencePort;
pub use persistence::{RequestPersistencePort, TextPersistencePort};
pub use translation::TranslationPort;
