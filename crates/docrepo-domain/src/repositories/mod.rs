//! Repository Interfaces
//!
//! Repositories abstract the storage and retrieval of domain entities,
//! providing a consistent interface regardless of the underlying store.

/// Generic document repository interface
pub mod document_repository;

pub use document_repository::DocumentRepository;
