/// Adapters - concrete backend implementations
///
/// These modules implement the port traits for specific services.
pub mod services;
pub mod storage;
