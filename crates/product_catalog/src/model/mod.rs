//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical product record owned by the repository.
//! - Define wire-facing request/view DTOs kept apart from storage shape.
//!
//! # Invariants
//! - A stored product always carries a resolved `ProductId` and `created_at`.
//! - DTOs never carry storage-only fields (`created_at`).

pub mod product;
