//! Persistence Adapters - Repository implementations
//!
//! These implement the `CustomerStore` trait from clientele-domain.

pub mod in_memory;
pub mod sqlite;
