//! # docrepo Server
//!
//! HTTP boundary over the admin authentication service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`admin`] | Rocket routes, guards, catchers and error mapping |
//! | [`init`] | Configuration, logging and launch |

pub mod admin;
pub mod init;

pub use init::run_server;
