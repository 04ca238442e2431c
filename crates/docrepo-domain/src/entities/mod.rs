//! Domain entities

pub mod admin;
pub mod document;

pub use admin::{Admin, AdminData, AdminSignIn};
pub use document::Document;
