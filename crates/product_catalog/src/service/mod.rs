//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate validator, mapper and repository calls into CRUD APIs.
//! - Keep callers decoupled from storage shape.

pub mod product_service;
