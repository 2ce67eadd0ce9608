//! In-Memory Customer Store
//!
//! Keeps records in a `Vec` in insertion order, the way a table without an
//! explicit ordering hands them back. Useful for testing and development.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use clientele_domain::{
    Customer, CustomerData, CustomerId, CustomerStore, CustomerWhereUnique, StoreError,
};

#[derive(Debug, Default)]
struct State {
    customers: Vec<Customer>,
    /// Highest id ever handed out. Ids are never reused.
    last_id: i64,
}

/// In-memory Customer Store
///
/// Thread-safe implementation using RwLock. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed set of records, kept in the given order.
    /// The next created id is one past the highest seeded id.
    ///
    /// Fails with `StoreError::Constraint` when two records share an id.
    pub fn with_customers(
        customers: impl IntoIterator<Item = Customer>,
    ) -> Result<Self, StoreError> {
        let customers: Vec<Customer> = customers.into_iter().collect();

        let mut seen = HashSet::with_capacity(customers.len());
        for customer in &customers {
            if !seen.insert(customer.id()) {
                return Err(StoreError::Constraint {
                    message: format!("duplicate customer id: {}", customer.id()),
                });
            }
        }

        let last_id = customers
            .iter()
            .map(|c| c.id().value())
            .max()
            .unwrap_or(0);

        Ok(Self {
            state: Arc::new(RwLock::new(State { customers, last_id })),
        })
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.customers.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.customers.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state.read().map_err(|_| StoreError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state.write().map_err(|_| StoreError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }
}

impl CustomerStore for InMemoryCustomerStore {
    async fn find_many(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.read()?.customers.clone())
    }

    async fn find_unique(
        &self,
        selector: &CustomerWhereUnique,
    ) -> Result<Option<Customer>, StoreError> {
        let state = self.read()?;
        Ok(state
            .customers
            .iter()
            .find(|c| c.id() == selector.id)
            .cloned())
    }

    async fn create(&self, data: CustomerData) -> Result<Customer, StoreError> {
        let mut state = self.write()?;
        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Persistence {
                message: "customer id space exhausted".to_string(),
            })?;
        let customer = Customer::new(CustomerId::new(state.last_id), data.name);
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update(
        &self,
        selector: &CustomerWhereUnique,
        data: CustomerData,
    ) -> Result<Customer, StoreError> {
        let mut state = self.write()?;
        let customer = state
            .customers
            .iter_mut()
            .find(|c| c.id() == selector.id)
            .ok_or(StoreError::NotFound { id: selector.id })?;
        customer.rename(data.name);
        Ok(customer.clone())
    }

    async fn delete(&self, selector: &CustomerWhereUnique) -> Result<Customer, StoreError> {
        let mut state = self.write()?;
        let index = state
            .customers
            .iter()
            .position(|c| c.id() == selector.id)
            .ok_or(StoreError::NotFound { id: selector.id })?;
        Ok(state.customers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> InMemoryCustomerStore {
        InMemoryCustomerStore::with_customers([
            Customer::new(CustomerId::new(1), "John Doe"),
            Customer::new(CustomerId::new(2), "Jane Doe"),
        ])
        .unwrap()
    }

    fn by_id(id: i64) -> CustomerWhereUnique {
        CustomerWhereUnique::id(CustomerId::new(id))
    }

    #[tokio::test]
    async fn test_find_many_keeps_insertion_order() {
        let store = seeded();

        let all = store.find_many().await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["John Doe", "Jane Doe"]);
    }

    #[tokio::test]
    async fn test_find_unique() {
        let store = seeded();

        let found = store.find_unique(&by_id(2)).await.unwrap().unwrap();
        assert_eq!(found.name(), "Jane Doe");

        assert!(store.find_unique(&by_id(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_continues_after_seed() {
        let store = seeded();

        let created = store.create(CustomerData::new("Alice Doe")).await.unwrap();
        assert_eq!(created.id(), CustomerId::new(3));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_on_empty_store_starts_at_one() {
        let store = InMemoryCustomerStore::new();
        assert!(store.is_empty().unwrap());

        let created = store.create(CustomerData::new("First")).await.unwrap();
        assert_eq!(created.id().value(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = seeded();

        // length + 1 would hand out 2 here and collide with Jane Doe
        store.delete(&by_id(1)).await.unwrap();
        let created = store.create(CustomerData::new("Alice Doe")).await.unwrap();
        assert_eq!(created.id(), CustomerId::new(3));

        // Deleting the newest record does not free its id either
        store.delete(&by_id(3)).await.unwrap();
        let created = store.create(CustomerData::new("Bob Doe")).await.unwrap();
        assert_eq!(created.id(), CustomerId::new(4));
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let store = seeded();

        let updated = store
            .update(&by_id(1), CustomerData::new("James Doe"))
            .await
            .unwrap();
        assert_eq!(updated, Customer::new(CustomerId::new(1), "James Doe"));

        // Position is unchanged
        let all = store.find_many().await.unwrap();
        assert_eq!(all[0].name(), "James Doe");
        assert_eq!(all[1], Customer::new(CustomerId::new(2), "Jane Doe"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = seeded();

        let err = store
            .update(&by_id(42), CustomerData::new("Nobody"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                id: CustomerId::new(42)
            }
        );
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = seeded();

        let removed = store.delete(&by_id(1)).await.unwrap();
        assert_eq!(removed.name(), "John Doe");
        assert_eq!(store.len().unwrap(), 1);

        let err = store.delete(&by_id(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = seeded();
        let other = store.clone();

        other.create(CustomerData::new("Alice Doe")).await.unwrap();
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_past_max_id_is_an_error() {
        let max = Customer::new(CustomerId::new(i64::MAX), "Max");
        let store = InMemoryCustomerStore::with_customers([max]).unwrap();

        let err = store.create(CustomerData::new("Next")).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Persistence {
                message: "customer id space exhausted".to_string()
            }
        );
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_seed_ids_are_rejected() {
        let err = InMemoryCustomerStore::with_customers([
            Customer::new(CustomerId::new(1), "John Doe"),
            Customer::new(CustomerId::new(1), "Johnny Doe"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            StoreError::Constraint {
                message: "duplicate customer id: 1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_persistence_error() {
        let store = seeded();
        let shared = store.clone();

        let result = std::thread::spawn(move || {
            let _guard = shared.state.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(
            store.find_many().await.unwrap_err(),
            StoreError::Persistence {
                message: "Failed to acquire read lock".to_string()
            }
        );
        assert_eq!(
            store
                .create(CustomerData::new("Alice Doe"))
                .await
                .unwrap_err(),
            StoreError::Persistence {
                message: "Failed to acquire write lock".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_find_many_returns_a_copy() {
        let store = seeded();

        let mut snapshot = store.find_many().await.unwrap();
        snapshot.clear();
        assert_eq!(store.len().unwrap(), 2);
    }
}
