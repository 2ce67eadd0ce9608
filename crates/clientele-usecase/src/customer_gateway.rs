//! Customer Gateway - Thin facade over a CustomerStore
//!
//! Each operation is a single call into the store. No validation, no
//! retries, no logging and no error translation happen here: whatever the
//! backend returns or raises reaches the caller as is.

use clientele_domain::{
    Customer, CustomerData, CustomerId, CustomerStore, CustomerWhereUnique, StoreError,
};

/// Customer Gateway
///
/// Holds nothing but the store handle, so it can be cloned and shared
/// across tasks whenever the store can.
#[derive(Debug, Clone)]
pub struct CustomerGateway<S> {
    store: S,
}

impl<S: CustomerStore> CustomerGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every customer, in backend order
    pub async fn list_all(&self) -> Result<Vec<Customer>, StoreError> {
        self.store.find_many().await
    }

    /// The customer with `id`, or `None` when absent
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.store.find_unique(&CustomerWhereUnique::id(id)).await
    }

    pub async fn create(&self, name: impl Into<String>) -> Result<Customer, StoreError> {
        self.store.create(CustomerData::new(name)).await
    }

    pub async fn update(
        &self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<Customer, StoreError> {
        self.store
            .update(&CustomerWhereUnique::id(id), CustomerData::new(name))
            .await
    }

    pub async fn delete(&self, id: CustomerId) -> Result<Customer, StoreError> {
        self.store.delete(&CustomerWhereUnique::id(id)).await
    }
}
