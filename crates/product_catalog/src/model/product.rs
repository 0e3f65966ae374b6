//! Product entity and DTOs.
//!
//! # Responsibility
//! - Define the canonical `Product` record shared by repository and service.
//! - Define `ProductDto` (create/update input) and `InfoProductDto` (read view).
//!
//! # Invariants
//! - `id` is `None` only before the first save; once assigned it never changes.
//! - `created_at` is fixed by the repository at first save.
//! - The nil uuid is never a valid stored identifier.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a stored product.
pub type ProductId = Uuid;

/// Canonical product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// `None` until the repository assigns an identifier.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    /// Non-negative amount. Enforced on input by the DTO validator.
    pub price: Decimal,
    /// Set by the repository on first save; ignored on input.
    pub created_at: Option<NaiveDateTime>,
}

impl Product {
    /// Creates an unsaved product without identifier or creation time.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            created_at: None,
        }
    }

    /// Returns the same product addressed to a caller-provided identifier.
    ///
    /// Used by callers that upsert under an identity they already own.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns whether the repository has assigned an identity yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some() && self.created_at.is_some()
    }
}

/// Create/update request shape.
///
/// `price` stays optional so that a missing value is reported by validation
/// together with every other field error instead of failing decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl ProductDto {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: Some(price),
        }
    }
}

/// Read-only projection returned by `get`/`get_all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
