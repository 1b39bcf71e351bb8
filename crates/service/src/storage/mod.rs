//! Storage abstractions for the service layer
//!
//! Configuration is an opaque key -> JSON blob store. Each key is read and
//! written as a whole; there is no per-record persistence.

pub mod config_store;
pub mod json_file_store;
pub mod memory_store;

pub use config_store::ConfigStore;
pub use json_file_store::JsonFileConfigStore;
pub use memory_store::MemoryConfigStore;
