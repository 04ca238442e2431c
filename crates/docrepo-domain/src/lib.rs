//! # Domain Layer
//!
//! Core contracts of docrepo: the [`entities::Document`] trait, the admin
//! entity, ids, filters and merge-patches, the ports implemented by
//! providers and the single error type shared by every layer.
//!
//! This crate has no knowledge of storage engines, hashing algorithms or
//! HTTP.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{Admin, AdminData, AdminSignIn, Document};
pub use error::{Error, Result};
pub use value_objects::{AccessToken, Claims, DocumentId, FieldFilter, Patch};
