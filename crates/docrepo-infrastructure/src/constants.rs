//! Infrastructure constants

// ============================================================================
// Configuration
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "docrepo.toml";

/// Project-local configuration directory
pub const LOCAL_CONFIG_DIR: &str = "config";

/// Directory under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "docrepo";

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "DOCREPO";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// Server
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// ============================================================================
// Authentication
// ============================================================================

/// Default token lifetime (1 hour)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 3600;

/// Longest accepted JWT lifetime (one year)
pub const JWT_MAX_EXPIRATION_SECS: u64 = 365 * 24 * 3600;

/// Default issuer claim
pub const JWT_DEFAULT_ISSUER: &str = "docrepo";

/// Minimum JWT secret length
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Default bcrypt cost
pub const BCRYPT_DEFAULT_COST: u32 = 12;

// ============================================================================
// Logging
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "DOCREPO_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "docrepo";
