//! Domain Events
//!
//! Events are immutable facts that other parts of the system react to.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`ChangeEvent`] | A cell committed a new value (or a deletion) for a key |

/// Change event definition
pub mod change_event;

pub use change_event::ChangeEvent;
