//! Value Codec Implementations
//!
//! | Codec | Format | Description |
//! |-------|--------|-------------|
//! | JsonCodec | JSON | Any `Serialize + DeserializeOwned` value |

pub mod json;

pub use json::JsonCodec;

// Re-export port trait from the domain layer
pub use keystash_domain::ports::ValueCodec;
