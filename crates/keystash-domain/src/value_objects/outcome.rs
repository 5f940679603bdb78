//! Outcomes of cell loads and writes
//!
//! Cells never return errors to their callers. These values describe what
//! happened so callers that care can inspect it; the observable value itself
//! only changes on [`WriteOutcome::Committed`].

use std::fmt;

/// Result of a caller-initiated write on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOutcome {
    /// The storage accepted the write, the value changed and an event was published
    Committed,
    /// The value could not be encoded; storage was not touched
    EncodeFailed,
    /// The storage provider returned `false` for `put` or `delete`
    StorageRejected,
}

impl WriteOutcome {
    /// Returns `true` if the write was committed
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Committed => "committed",
            Self::EncodeFailed => "encode failed",
            Self::StorageRejected => "storage rejected",
        };
        f.write_str(label)
    }
}

/// Where a cell's value came from when it was (re)loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// Stored bytes were found and decoded
    Stored,
    /// The storage held no entry; the default value is in use
    Absent,
    /// Stored bytes failed to decode; the default value is in use
    DecodeFailed,
}

impl LoadOutcome {
    /// Returns `true` if the default value is in use
    pub fn used_default(&self) -> bool {
        !matches!(self, Self::Stored)
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stored => "stored",
            Self::Absent => "absent",
            Self::DecodeFailed => "decode failed",
        };
        f.write_str(label)
    }
}
