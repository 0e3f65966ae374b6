//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the product data access contract.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Repositories key records by identity, never by value equality.
//! - Repository APIs hand out clones, never handles into shared state.

pub mod product_repo;
