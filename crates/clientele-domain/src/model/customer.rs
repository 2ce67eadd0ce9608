//! Customer - The sole entity of the service
//!
//! The `id` is assigned by the persistence backend on creation and never
//! changes afterwards. The `name` is free text; this layer enforces no
//! format or uniqueness rule on it.

/// Unique identifier for a Customer
///
/// Backends hand these out. Callers must not assume the sequence is
/// gap-free once records have been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer record as stored by a backend
///
/// Equality compares every field, so a test can tell an untouched record
/// from a renamed one with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name in place. Used by backends applying an update.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
