//! Cryptographic services module
//!
//! AES-256-GCM encryption used to protect stored blobs at rest.

mod encryption;

pub use encryption::CryptoService;
