//! # Clientele Adapter Layer
//!
//! Implementations of the domain's `CustomerStore` port.
//!
//! ## Structure
//!
//! - `repository/in_memory` - Vec-backed store for tests and local runs
//! - `repository/sqlite` - sqlx-backed store over a SQLite database

pub mod repository;

pub use repository::in_memory::InMemoryCustomerStore;
pub use repository::sqlite::{SqliteConfig, SqliteCustomerStore};
