//! Process-wide change bus
//!
//! Cells created without an explicit bus share this instance, so every cell
//! bound to a key in the process sees the others' writes. The bus lives for
//! the whole process; individual cells unsubscribe when dropped.

use keystash_domain::constants::CHANGE_BUS_DEFAULT_CAPACITY;
use keystash_domain::ports::SharedChangeBus;
use keystash_providers::TokioChangeBus;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

static GLOBAL_CHANGE_BUS: OnceCell<SharedChangeBus> = OnceCell::new();

/// The process-wide change bus
///
/// Created on first use with the default capacity unless
/// [`init_global_change_bus`] ran first.
pub fn global_change_bus() -> SharedChangeBus {
    init_global_change_bus(CHANGE_BUS_DEFAULT_CAPACITY)
}

/// The process-wide change bus, creating it with `capacity` if it does not
/// exist yet
///
/// The capacity of an already created bus is left unchanged.
pub fn init_global_change_bus(capacity: usize) -> SharedChangeBus {
    GLOBAL_CHANGE_BUS
        .get_or_init(|| {
            debug!(capacity, "Creating process-wide change bus");
            Arc::new(TokioChangeBus::with_capacity(capacity))
        })
        .clone()
}
