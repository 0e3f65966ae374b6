//! Product repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the canonical set of product records keyed by `ProductId`.
//! - Provide upsert-by-identity `save` so services can read, merge and save.
//!
//! # Invariants
//! - `created_at` of a stored id never changes across saves.
//! - Every `save`/`delete` runs under one write lock; reads never observe a
//!   partially applied upsert.
//! - Callers only ever receive clones of stored records.

use crate::model::product::{Product, ProductId};
use chrono::Local;
use log::{debug, info};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for product storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Input product cannot be stored as given.
    InvalidArgument(String),
    /// Store lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::LockPoisoned(op) => write!(f, "product store lock poisoned during {op}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for product records.
pub trait ProductRepository {
    /// Returns the stored record, or `None` when absent or `id` is nil.
    fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Returns an independent snapshot of all records in unspecified order.
    fn find_all(&self) -> RepoResult<Vec<Product>>;
    /// Inserts or updates by identity and returns the stored record.
    fn save(&self, product: Product) -> RepoResult<Product>;
    /// Removes the record if present. Absent ids are a no-op.
    fn delete(&self, id: ProductId) -> RepoResult<()>;
}

impl<R: ProductRepository + ?Sized> ProductRepository for &R {
    fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        (**self).find_all()
    }

    fn save(&self, product: Product) -> RepoResult<Product> {
        (**self).save(product)
    }

    fn delete(&self, id: ProductId) -> RepoResult<()> {
        (**self).delete(id)
    }
}

/// HashMap-backed product store.
///
/// Clones share one underlying store, so the instance built at startup can be
/// handed to every service that needs it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    storage: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> RepoResult<usize> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepoError::LockPoisoned("len"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> RepoResult<Option<Product>> {
        if id.is_nil() {
            return Ok(None);
        }

        let storage = self
            .storage
            .read()
            .map_err(|_| RepoError::LockPoisoned("find_by_id"))?;
        Ok(storage.get(&id).cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepoError::LockPoisoned("find_all"))?;
        Ok(storage.values().cloned().collect())
    }

    fn save(&self, product: Product) -> RepoResult<Product> {
        if product.id.is_some_and(|id| id.is_nil()) {
            return Err(RepoError::InvalidArgument(
                "product id must not be the nil uuid".to_string(),
            ));
        }

        let id = product.id.unwrap_or_else(Uuid::new_v4);
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepoError::LockPoisoned("save"))?;

        let stored = match storage.entry(id) {
            Entry::Occupied(mut entry) => {
                let created_at = entry.get().created_at;
                let record = materialize(id, created_at, product);
                entry.insert(record.clone());
                debug!("event=product_save module=repo status=ok mode=update id={id}");
                record
            }
            Entry::Vacant(entry) => {
                let record = materialize(id, Some(Local::now().naive_local()), product);
                entry.insert(record.clone());
                info!("event=product_save module=repo status=ok mode=insert id={id}");
                record
            }
        };

        Ok(stored)
    }

    fn delete(&self, id: ProductId) -> RepoResult<()> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepoError::LockPoisoned("delete"))?;
        let removed = storage.remove(&id).is_some();
        debug!("event=product_delete module=repo status=ok id={id} removed={removed}");
        Ok(())
    }
}

fn materialize(
    id: ProductId,
    created_at: Option<chrono::NaiveDateTime>,
    product: Product,
) -> Product {
    Product {
        id: Some(id),
        name: product.name,
        description: product.description,
        price: product.price,
        created_at,
    }
}
