pub mod fixtures;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{Product, ProductAttributes, ProductId};

pub use fixtures::{load_seed_file, sample_catalog, seed_store, SeedError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(ProductId),
}

/// Products plus the id counter. Both sit behind one lock so an id is
/// assigned and appended in the same critical section.
#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    last_id: ProductId,
}

impl Catalog {
    fn insert(&mut self, attributes: ProductAttributes) -> Product {
        self.last_id += 1;
        let product = Product::new(self.last_id, attributes);
        self.products.push(product.clone());
        product
    }
}

/// In-memory product collection shared by every request handler.
///
/// Cloning is cheap and every clone sees the same products. Products live
/// until the process exits; there is no update or delete.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<Mutex<Catalog>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        // Every critical section leaves the catalog consistent, so a poisoned
        // lock is still safe to use.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Assign the next id and append the product.
    pub fn add(&self, attributes: ProductAttributes) -> Product {
        let product = self.catalog().insert(attributes);
        tracing::debug!("Product {} created: {}", product.id, product.attributes.name);
        product
    }

    /// Add each product in input order with consecutive ids.
    ///
    /// Holds the lock for the whole batch, so no concurrent create can take an
    /// id in the middle of it. There is no rollback: each element is committed
    /// as soon as it is inserted.
    pub fn add_many<I>(&self, batch: I) -> Vec<Product>
    where
        I: IntoIterator<Item = ProductAttributes>,
    {
        let mut catalog = self.catalog();
        let created: Vec<Product> = batch.into_iter().map(|attrs| catalog.insert(attrs)).collect();
        tracing::debug!("Batch of {} products created, last id {}", created.len(), catalog.last_id);
        created
    }

    /// All products in insertion (ascending id) order.
    pub fn all(&self) -> Vec<Product> {
        self.catalog().products.clone()
    }

    pub fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        self.catalog()
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Products with a price strictly greater than `threshold`, in store order.
    pub fn priced_above(&self, threshold: f64) -> Vec<Product> {
        self.catalog()
            .products
            .iter()
            .filter(|product| product.price() > threshold)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.catalog().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
