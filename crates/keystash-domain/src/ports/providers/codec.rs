//! Value Codec Port
//!
//! Reversible conversion between a typed value and the bytes handed to a
//! [`SecureStorageProvider`](super::SecureStorageProvider).
//!
//! Any reversible encoding is acceptable. Codecs carry no versioning; a blob
//! that no longer decodes is treated by cells as "no value".

use crate::error::Result;
use std::sync::Arc;

/// Codec interface for values of type `T`
pub trait ValueCodec<T>: Send + Sync {
    /// Encode a value into bytes
    fn encode(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode bytes back into a value
    fn decode(&self, bytes: &[u8]) -> Result<T>;

    /// Get the name/identifier of this codec
    fn codec_name(&self) -> &str;
}

/// Shared codec for dependency injection
pub type SharedCodec<T> = Arc<dyn ValueCodec<T>>;
