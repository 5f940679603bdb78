//! Domain layer constants
//!
//! Constants shared by the application and provider layers.
//! Infrastructure-specific constants live in `keystash_infrastructure::constants`.

// ============================================================================
// CHANGE BUS CONSTANTS
// ============================================================================

/// Default buffer capacity of the in-process change bus
pub const CHANGE_BUS_DEFAULT_CAPACITY: usize = 1024;

/// Topic name under which storage updates are broadcast
pub const STORAGE_UPDATED_TOPIC: &str = "keystash.storage_updated";
