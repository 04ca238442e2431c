//! Provider constants

/// Lowest bcrypt cost accepted by the algorithm
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted by the algorithm
pub const BCRYPT_MAX_COST: u32 = 31;

/// Suffix of the temporary file written before a collection file is replaced
pub const COLLECTION_TMP_EXTENSION: &str = "json.tmp";
