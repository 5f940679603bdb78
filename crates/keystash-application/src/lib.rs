//! # Keystash - Application Layer
//!
//! Storage-backed observable values and the glue around them.
//!
//! ## Architecture
//!
//! The application layer:
//! - Owns the synchronization core ([`ValueCell`]): load-or-default on
//!   construction, write-through then publish on mutation, silent
//!   application of remote changes
//! - Adapts cells for UI code ([`StorageBinding`])
//! - Declares the registry storage providers register into at link time
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `keystash-domain`: value objects, events and port traits
//! - `tokio` for watch channels and the bus listener task

pub mod binding;
pub mod cell;
pub mod registry;

pub use binding::StorageBinding;
pub use cell::{CellSubscription, ValueCell};
