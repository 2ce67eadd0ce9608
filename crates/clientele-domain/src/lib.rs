//! # Clientele Domain Layer
//!
//! The customer vocabulary and the persistence port, with zero external
//! dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Customer entity & identifier                 ││
//! │  │  repository/ - CustomerStore port, query shapes, StoreError ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Swapping SQLite for another engine, or for the in-memory store used in
//! tests, never touches this crate.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::customer::{Customer, CustomerId};

pub use repository::customer_store::{
    CustomerData, CustomerStore, CustomerWhereUnique, StoreError,
};
