//! Present-or-absent stored values

/// A value held by a cell, or the absence of one
///
/// Writing [`StoredValue::Absent`] to a cell deletes the storage entry
/// instead of putting an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoredValue<T> {
    /// A concrete value
    Present(T),
    /// No value
    Absent,
}

impl<T> StoredValue<T> {
    /// Returns `true` if this is [`StoredValue::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is [`StoredValue::Present`]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the inner value, if present
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Convert into an `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Map the inner value, preserving absence
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StoredValue<U> {
        match self {
            Self::Present(value) => StoredValue::Present(f(value)),
            Self::Absent => StoredValue::Absent,
        }
    }

    /// Return the inner value or `fallback` when absent
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }
}

impl<T> Default for StoredValue<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for StoredValue<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> From<Option<T>> for StoredValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<StoredValue<T>> for Option<T> {
    fn from(value: StoredValue<T>) -> Self {
        value.into_option()
    }
}
