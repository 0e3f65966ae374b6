//! Product use-case service.
//!
//! # Responsibility
//! - Expose the catalog CRUD contract over DTOs.
//! - Validate input and enforce existence before mutating the repository.
//!
//! # Invariants
//! - Validation runs before any repository access; an invalid update on a
//!   missing id reports validation, not not-found.
//! - Failed calls never mutate the repository.
//! - `delete` performs no existence check.

use crate::mapper::product_mapper::{DefaultProductMapper, ProductMapper};
use crate::model::product::{InfoProductDto, ProductDto, ProductId};
use crate::repo::product_repo::{ProductRepository, RepoError};
use crate::validator::product_validator::ProductDtoValidator;
use crate::validator::{ValidationErrors, Validator};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for product use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductServiceError {
    /// Request failed one or more field rules.
    Validation(ValidationErrors),
    /// Target product does not exist.
    NotFound(ProductId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ProductServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::NotFound(id) => write!(f, "Product with uuid: {id} not found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProductServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for ProductServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ValidationErrors> for ProductServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

pub type ServiceResult<T> = Result<T, ProductServiceError>;

/// Product service over pluggable repository, validator and mapper.
pub struct ProductService<R, V = ProductDtoValidator, M = DefaultProductMapper>
where
    R: ProductRepository,
    V: Validator<ProductDto>,
    M: ProductMapper,
{
    repo: R,
    validator: V,
    mapper: M,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service with the default validator and mapper.
    pub fn with_defaults(repo: R) -> Self {
        Self::new(repo, ProductDtoValidator::new(), DefaultProductMapper)
    }
}

impl<R, V, M> ProductService<R, V, M>
where
    R: ProductRepository,
    V: Validator<ProductDto>,
    M: ProductMapper,
{
    pub fn new(repo: R, validator: V, mapper: M) -> Self {
        Self {
            repo,
            validator,
            mapper,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns the read view of one product.
    ///
    /// # Errors
    /// - `NotFound(id)` when no record exists.
    pub fn get(&self, id: ProductId) -> ServiceResult<InfoProductDto> {
        let product = self
            .repo
            .find_by_id(id)?
            .ok_or(ProductServiceError::NotFound(id))?;
        Ok(self.mapper.to_info_view(&product))
    }

    /// Returns read views of every product in repository snapshot order.
    pub fn get_all(&self) -> ServiceResult<Vec<InfoProductDto>> {
        Ok(self
            .repo
            .find_all()?
            .iter()
            .map(|product| self.mapper.to_info_view(product))
            .collect())
    }

    /// Validates and stores a new product, returning its generated id.
    ///
    /// # Errors
    /// - `Validation` carrying every failing field.
    pub fn create(&self, dto: &ProductDto) -> ServiceResult<ProductId> {
        self.check(dto, "product_create")?;

        let saved = self.repo.save(self.mapper.to_entity(dto))?;
        let id = saved.id.ok_or_else(|| {
            RepoError::InvalidArgument("repository returned a record without id".to_string())
        })?;
        info!("event=product_create module=service status=ok id={id}");
        Ok(id)
    }

    /// Replaces name, description and price of an existing product.
    ///
    /// # Errors
    /// - `Validation` when `dto` is invalid, checked first.
    /// - `NotFound(id)` when no record exists.
    pub fn update(&self, id: ProductId, dto: &ProductDto) -> ServiceResult<()> {
        self.check(dto, "product_update")?;

        let Some(existing) = self.repo.find_by_id(id)? else {
            warn!("event=product_update module=service status=not_found id={id}");
            return Err(ProductServiceError::NotFound(id));
        };
        self.repo.save(self.mapper.merge(&existing, dto))?;
        info!("event=product_update module=service status=ok id={id}");
        Ok(())
    }

    /// Deletes a product. Deleting an absent id succeeds.
    pub fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.repo.delete(id)?;
        info!("event=product_delete module=service status=ok id={id}");
        Ok(())
    }

    fn check(&self, dto: &ProductDto, event: &str) -> Result<(), ValidationErrors> {
        match ValidationErrors::from_errors(self.validator.validate(dto)) {
            None => Ok(()),
            Some(errors) => {
                warn!(
                    "event={event} module=service status=invalid fields={}",
                    errors.field_names()
                );
                Err(errors)
            }
        }
    }
}
