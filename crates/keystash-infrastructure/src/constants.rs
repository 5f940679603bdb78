//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "keystash.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "keystash";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "KEYSTASH";

/// Separator between nesting levels in environment variable names
/// (`KEYSTASH_CHANGE_BUS__CAPACITY` sets `change_bus.capacity`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Storage provider used when none is configured
pub const DEFAULT_STORAGE_PROVIDER: &str = "memory";

/// Service name separating this application's entries from others
pub const DEFAULT_STORAGE_SERVICE: &str = "keystash";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "KEYSTASH_LOG";

/// Log file name stem used when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "keystash";

// ============================================================================
// CRYPTO CONSTANTS
// ============================================================================

/// AES-GCM key size in bytes
pub const AES_GCM_KEY_SIZE: usize = 32;

/// AES-GCM nonce size in bytes
pub const AES_GCM_NONCE_SIZE: usize = 12;
