//! Wiring of providers from configuration

pub mod bootstrap;

pub use bootstrap::{KeystashContext, init_context, resolve_change_bus, resolve_storage};
