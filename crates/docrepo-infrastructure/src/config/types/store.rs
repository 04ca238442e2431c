//! Document store configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Document store backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProviderKind {
    /// Process-local, lost on restart
    #[default]
    Memory,
    /// JSON files under `data_dir`
    Filesystem,
}

impl fmt::Display for StoreProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Filesystem => write!(f, "filesystem"),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to use
    pub provider: StoreProviderKind,

    /// Data directory, required by the filesystem backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
