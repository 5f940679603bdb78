//! # Keystash - Domain Layer
//!
//! Core types and port contracts for storage-backed observable values.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | `StorageKey`, `CellId`, `StoredValue`, write/load outcomes |
//! | [`events`] | `ChangeEvent` broadcast between cells |
//! | [`ports`] | Storage, codec, crypto and change bus contracts |
//! | [`constants`] | Domain constants |
//!
//! The domain layer has no knowledge of how values are stored or how events
//! travel; adapters live in `keystash-providers`.

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::ChangeEvent;
pub use value_objects::{CellId, LoadOutcome, StorageKey, StoredValue, WriteOutcome};
