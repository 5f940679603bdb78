//! Domain Value Objects
//!
//! Immutable value objects describing stored values and their identities.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`StorageKey`] | Name of one logical stored value |
//! | [`CellId`] | Identity of one live value cell |
//! | [`StoredValue`] | `Present(T)` or `Absent` |
//! | [`WriteOutcome`] | What happened to a caller-initiated write |
//! | [`LoadOutcome`] | Where a loaded value came from |

/// Cell identity
pub mod cell_id;
/// Storage key
pub mod key;
/// Write and load outcomes
pub mod outcome;
/// Present-or-absent values
pub mod stored_value;

pub use cell_id::CellId;
pub use key::StorageKey;
pub use outcome::{LoadOutcome, WriteOutcome};
pub use stored_value::StoredValue;
