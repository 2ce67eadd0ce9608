//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! The domain states what it needs from persistence. Adapters decide how.
//!
//! ```text
//! Domain Layer           │  Adapter Layer
//! ───────────────────────┼────────────────────────
//! trait CustomerStore    │  SqliteCustomerStore
//!   fn find_many()       │  InMemoryCustomerStore
//!   fn find_unique()     │
//!   fn create()          │
//!   fn update()          │
//!   fn delete()          │
//! ```

pub mod customer_store;
