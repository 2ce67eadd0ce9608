//! Customer Store - Abstract persistence for Customers
//!
//! The five verbs a persistence client must offer. Query shapes follow the
//! `where` / `data` split common to ORM query builders, so an adapter over a
//! real engine maps them one to one.

use core::future::Future;

use crate::model::customer::{Customer, CustomerId};

/// Unique selector: picks at most one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerWhereUnique {
    pub id: CustomerId,
}

impl CustomerWhereUnique {
    pub fn id(id: CustomerId) -> Self {
        Self { id }
    }
}

/// Write payload for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerData {
    pub name: String,
}

impl CustomerData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Faults raised by a persistence backend
///
/// This is the only error kind the service knows about. It travels from
/// the backend to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record matches the selector
    NotFound { id: CustomerId },
    /// The backend rejected the write (unique, not-null, check...)
    Constraint { message: String },
    /// The backend could not be reached
    Connection { message: String },
    /// Any other backend failure
    Persistence { message: String },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "Customer not found: {}", id)
            }
            StoreError::Constraint { message } => {
                write!(f, "Constraint violation: {}", message)
            }
            StoreError::Connection { message } => {
                write!(f, "Connection error: {}", message)
            }
            StoreError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Customer Store Trait
///
/// This is the PORT in hexagonal architecture. The SQL adapter and the
/// in-memory store both implement it, and the gateway is generic over it.
///
/// Every method takes `&self`: a store is shared by concurrent callers and
/// owns its own synchronization.
pub trait CustomerStore: Send + Sync {
    /// All records, in the backend's storage order
    fn find_many(&self) -> impl Future<Output = Result<Vec<Customer>, StoreError>> + Send;

    /// The record matching the selector, or `None`
    fn find_unique(
        &self,
        selector: &CustomerWhereUnique,
    ) -> impl Future<Output = Result<Option<Customer>, StoreError>> + Send;

    /// Insert a record; the backend assigns the id
    fn create(
        &self,
        data: CustomerData,
    ) -> impl Future<Output = Result<Customer, StoreError>> + Send;

    /// Overwrite the matching record and return it.
    /// Fails with `StoreError::NotFound` when nothing matches.
    fn update(
        &self,
        selector: &CustomerWhereUnique,
        data: CustomerData,
    ) -> impl Future<Output = Result<Customer, StoreError>> + Send;

    /// Remove the matching record and return it.
    /// Fails with `StoreError::NotFound` when nothing matches.
    fn delete(
        &self,
        selector: &CustomerWhereUnique,
    ) -> impl Future<Output = Result<Customer, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound {
            id: CustomerId::new(9),
        };
        assert_eq!(err.to_string(), "Customer not found: 9");

        let err = StoreError::Constraint {
            message: "NOT NULL constraint failed: customers.name".to_string(),
        };
        assert!(err.to_string().starts_with("Constraint violation"));
    }

    #[test]
    fn test_query_shapes() {
        let selector = CustomerWhereUnique::id(CustomerId::new(1));
        assert_eq!(selector.id.value(), 1);

        let data = CustomerData::new("Alice Doe");
        assert_eq!(data.name, "Alice Doe");
    }
}
