//! External service provider ports

/// Value codec port
pub mod codec;
/// Cryptographic provider port
pub mod crypto;
/// Secure storage provider port
pub mod storage;

pub use codec::{SharedCodec, ValueCodec};
pub use crypto::{CryptoProvider, EncryptedData};
pub use storage::{SecureStorageProvider, SharedStorageProvider};
