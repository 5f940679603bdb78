//! Change Bus Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullChangeBus | Testing | Discards all events |
//! | TokioChangeBus | In-Process | Tokio broadcast channels |
//!
//! ## Provider Selection Guide
//!
//! - **Testing / isolated cells**: Use `NullChangeBus`
//! - **Applications**: Use `TokioChangeBus`, normally the process-wide
//!   instance returned by `keystash_infrastructure::global_change_bus()`

pub mod null;
pub mod tokio;

pub use self::null::NullChangeBus;
pub use self::tokio::TokioChangeBus;

// Re-export port trait from the domain layer
pub use keystash_domain::ports::{ChangeBusProvider, ChangeEventStream};

// Re-export event type
pub use keystash_domain::events::ChangeEvent;
