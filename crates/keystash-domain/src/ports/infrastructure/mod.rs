//! Infrastructure service ports

/// Change bus port
pub mod change_bus;

pub use change_bus::{ChangeBusProvider, ChangeEventStream, SharedChangeBus};
