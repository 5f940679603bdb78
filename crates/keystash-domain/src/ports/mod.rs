//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the domain and external layers.
//! High-level code (value cells) depends on these traits; providers and
//! infrastructure implement them.
//!
//! ## Organization
//!
//! - **infrastructure/** - In-process services (change bus)
//! - **providers/** - External capabilities (secure storage, codecs, crypto)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{ChangeBusProvider, ChangeEventStream, SharedChangeBus};
pub use providers::{
    CryptoProvider, EncryptedData, SecureStorageProvider, SharedCodec, SharedStorageProvider,
    ValueCodec,
};
