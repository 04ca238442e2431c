//! Value Objects
//!
//! Immutable values passed between layers: ids, filters, patches and tokens.

pub mod filter;
pub mod id;
pub mod patch;
pub mod token;

pub use filter::FieldFilter;
pub use id::DocumentId;
pub use patch::{Patch, is_empty_value};
pub use token::{AccessToken, Claims};
