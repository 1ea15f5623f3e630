use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CatalogConfig;
use crate::models::ProductAttributes;
use crate::store::ProductStore;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file {path} is not a JSON array of products: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The demo catalog: six grocery items priced 9.99 through 59.99.
pub fn sample_catalog() -> Vec<ProductAttributes> {
    let item = |name: &str, quantity: i64, code: &str, is_published: bool, expiration: &str, price: f64| {
        ProductAttributes {
            name: name.to_string(),
            quantity,
            code_value: code.to_string(),
            is_published,
            expiration: expiration.to_string(),
            price,
        }
    };

    vec![
        item("Cheese", 10, "ABC123", true, "2022-12-31", 9.99),
        item("Jam", 5, "XYZ789", false, "2023-06-30", 19.99),
        item("Milk", 20, "LMN456", true, "2023-01-31", 29.99),
        item("Bread", 15, "QWE123", true, "2023-03-31", 39.99),
        item("Butter", 10, "ASD456", true, "2023-04-30", 49.99),
        item("Eggs", 12, "ZXC789", true, "2023-05-31", 59.99),
    ]
}

/// Read a JSON array of products. Any `id` in the file is ignored; the store
/// assigns ids when the products are added.
pub fn load_seed_file(path: &Path) -> Result<Vec<ProductAttributes>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Populate an empty store at startup: the sample catalog first when enabled,
/// then the seed file. Returns how many products were added.
pub fn seed_store(store: &ProductStore, catalog: &CatalogConfig) -> Result<usize, SeedError> {
    let mut seeded = 0;

    if catalog.load_sample_data {
        seeded += store.add_many(sample_catalog()).len();
    }
    if let Some(path) = &catalog.seed_file {
        let products = load_seed_file(path)?;
        tracing::debug!("Loaded {} products from {}", products.len(), path.display());
        seeded += store.add_many(products).len();
    }

    Ok(seeded)
}
