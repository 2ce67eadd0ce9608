//! Domain Models
//!
//! Only one entity lives here. Relationships between entities are out of
//! scope for this service.

pub mod customer;
