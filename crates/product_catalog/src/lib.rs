//! In-memory product catalog.
//! Repository owns product records; the service validates, maps and
//! enforces existence before mutating it.

pub mod config;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod service;
pub mod validator;

pub use config::{LogConfig, ValidationRules};
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use mapper::product_mapper::{DefaultProductMapper, ProductMapper};
pub use model::product::{InfoProductDto, Product, ProductDto, ProductId};
pub use repo::product_repo::{InMemoryProductRepository, ProductRepository, RepoError, RepoResult};
pub use service::product_service::{ProductService, ProductServiceError, ServiceResult};
pub use validator::product_validator::ProductDtoValidator;
pub use validator::{FieldError, ValidationErrors, Validator};

/// Returns the crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
