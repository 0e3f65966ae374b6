//! Catalog configuration values.
//!
//! # Responsibility
//! - Hold validation rule bounds used by the product DTO validator.
//! - Resolve logging bootstrap settings from the process environment.
//!
//! # Invariants
//! - Defaults reproduce the catalog's documented field rules.
//! - Environment lookup never panics; missing values fall back to defaults.

use crate::logging::default_log_level;

/// Env var overriding the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "PRODUCT_CATALOG_LOG_LEVEL";
/// Env var holding the absolute log directory. Logging stays off when unset.
pub const LOG_DIR_ENV: &str = "PRODUCT_CATALOG_LOG_DIR";

const DEFAULT_NAME_LEN: (usize, usize) = (5, 10);
const DEFAULT_DESCRIPTION_LEN: (usize, usize) = (10, 30);

/// Inclusive length bounds for text fields of `ProductDto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// `(min, max)` characters for `name`.
    pub name_len: (usize, usize),
    /// `(min, max)` characters for `description`.
    pub description_len: (usize, usize),
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_len: DEFAULT_NAME_LEN,
            description_len: DEFAULT_DESCRIPTION_LEN,
        }
    }
}

/// Logging bootstrap settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub log_dir: Option<String>,
}

impl LogConfig {
    /// Reads `PRODUCT_CATALOG_LOG_LEVEL` and `PRODUCT_CATALOG_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty());
        Self { level, log_dir }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}
