//! Conversions between wire-facing DTOs and the product entity.

pub mod product_mapper;
