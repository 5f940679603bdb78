//! JSON value codec
//!
//! Encodes values with `serde_json`. This is the default codec: any type
//! deriving `Serialize` and `Deserialize` can be stored.

use keystash_domain::error::{Error, Result};
use keystash_domain::ports::ValueCodec;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// JSON codec for serde-compatible values
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl<T> ValueCodec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| Error::encode(format!("Failed to encode value as JSON: {}", e)))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::decode(format!("Failed to decode JSON value: {}", e)))
    }

    fn codec_name(&self) -> &str {
        "json"
    }
}
