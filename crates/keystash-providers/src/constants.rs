//! Provider layer constants

// ============================================================================
// FILESYSTEM STORAGE CONSTANTS
// ============================================================================

/// File extension of stored entries
pub const FILESYSTEM_ENTRY_EXTENSION: &str = "entry";

/// File extension of in-flight writes
pub const FILESYSTEM_TEMP_EXTENSION: &str = "tmp";

/// Longest key (in bytes) the filesystem provider accepts.
/// Hex encoding doubles the length, keeping file names under 255 bytes.
pub const FILESYSTEM_MAX_KEY_BYTES: usize = 120;

/// Unix permissions applied to stored entries
pub const FILESYSTEM_ENTRY_MODE: u32 = 0o600;
