//! Product DTO/entity mapper.
//!
//! # Invariants
//! - `to_entity` never assigns identity or creation time.
//! - `merge` keeps identity and creation time of the existing record.

use crate::model::product::{InfoProductDto, Product, ProductDto};
use uuid::Uuid;

/// Mapping capabilities used by the product service.
pub trait ProductMapper {
    /// Builds an unsaved entity from request input.
    fn to_entity(&self, dto: &ProductDto) -> Product;
    /// Projects an entity into its read view.
    fn to_info_view(&self, product: &Product) -> InfoProductDto;
    /// Applies request fields onto an existing entity.
    fn merge(&self, existing: &Product, dto: &ProductDto) -> Product;
}

/// Field-by-field mapper.
///
/// Expects validated input: a missing price maps to zero in `to_entity` and
/// keeps the existing price in `merge`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProductMapper;

impl ProductMapper for DefaultProductMapper {
    fn to_entity(&self, dto: &ProductDto) -> Product {
        Product::new(
            dto.name.clone(),
            dto.description.clone(),
            dto.price.unwrap_or_default(),
        )
    }

    fn to_info_view(&self, product: &Product) -> InfoProductDto {
        InfoProductDto {
            id: product.id.unwrap_or_else(Uuid::nil),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }

    fn merge(&self, existing: &Product, dto: &ProductDto) -> Product {
        Product {
            id: existing.id,
            name: dto.name.clone(),
            description: dto.description.clone(),
            price: dto.price.unwrap_or(existing.price),
            created_at: existing.created_at,
        }
    }
}
