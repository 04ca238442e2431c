//! Application Layer - docrepo
//!
//! Use cases and the store-backed repository implementation.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the domain's `DocumentRepository<T>` on top of any
//!   `DocumentStoreProvider`
//! - Contains the admin signup/login use case
//! - Has no dependencies on infrastructure or HTTP
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `docrepo-domain`: For entities, value objects, ports and errors
//! - Pure Rust libraries for async, serialization and validation

pub mod domain_services;
pub mod repositories;
pub mod use_cases;

pub use domain_services::*;
pub use repositories::*;
pub use use_cases::*;
