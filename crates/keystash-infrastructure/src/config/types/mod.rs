//! Configuration types module

pub mod app;
pub mod change_bus;
pub mod logging;
pub mod storage;

// Re-export main types
pub use app::*;
pub use change_bus::*;
pub use logging::*;
pub use storage::*;
