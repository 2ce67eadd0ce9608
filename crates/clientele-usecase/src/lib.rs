//! # Clientele Use Case Layer
//!
//! The customer gateway: five named operations, each forwarded to a
//! [`CustomerStore`](clientele_domain::CustomerStore) without added logic.

pub use clientele_domain;

pub mod customer_gateway;

pub use customer_gateway::CustomerGateway;
