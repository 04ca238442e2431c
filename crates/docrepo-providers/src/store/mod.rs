//! Document Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryDocumentStore | Local | In-memory storage (non-persistent) |
//! | FilesystemDocumentStore | Local | One JSON file per collection |
//!
//! Both enforce unique indexes atomically with the write that could break them.

pub mod collection;
#[cfg(feature = "store-filesystem")]
pub mod filesystem;
#[cfg(feature = "store-memory")]
pub mod in_memory;

#[cfg(feature = "store-filesystem")]
pub use filesystem::FilesystemDocumentStore;
#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryDocumentStore;
