//! Product records and the two product lists shown on screen.

mod data;
mod product;

pub use data::{catalog_products, featured_products};
pub use product::{Product, ProductId};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a product file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read product file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse product file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Product validation failed: {message}")]
    Validation { message: String },
}

/// Featured strip and main catalog.
///
/// The lists are kept apart: they are rendered separately and nothing
/// merges them under a single key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub featured: Vec<Product>,
    #[serde(default, rename = "catalog")]
    pub items: Vec<Product>,
}

impl Catalog {
    pub fn new(featured: Vec<Product>, items: Vec<Product>) -> Self {
        Self { featured, items }
    }

    /// Compiled-in product data.
    pub fn builtin() -> Self {
        Self::new(featured_products(), catalog_products())
    }

    /// Loads a product file: JSON when the extension is `.json`, TOML otherwise.
    ///
    /// The file holds two top-level arrays, `featured` and `catalog`.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog: Catalog = if is_json {
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        catalog.validate()?;
        tracing::info!(
            path = %path.display(),
            featured = catalog.featured.len(),
            catalog = catalog.items.len(),
            "Loaded product file"
        );
        Ok(catalog)
    }

    /// Validates the product lists.
    ///
    /// Checks:
    /// - Every product has a non-empty id
    /// - Ids are unique within each list
    ///
    /// An id present in both lists is accepted and only logged.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (label, products) in [("featured", &self.featured), ("catalog", &self.items)] {
            let mut seen = HashSet::new();
            for product in products {
                if product.id.is_empty() {
                    return Err(CatalogError::Validation {
                        message: format!("Product with empty id in '{}' list", label),
                    });
                }
                if !seen.insert(product.id.as_str()) {
                    return Err(CatalogError::Validation {
                        message: format!(
                            "Duplicate product id '{}' in '{}' list",
                            product.id, label
                        ),
                    });
                }
            }
        }

        for id in self.shared_ids() {
            tracing::warn!(id = %id, "Product id appears in both featured and catalog lists");
        }

        Ok(())
    }

    /// Ids present in both lists.
    pub fn shared_ids(&self) -> Vec<&ProductId> {
        let featured: HashSet<&ProductId> = self.featured.iter().map(|p| &p.id).collect();
        self.items
            .iter()
            .map(|p| &p.id)
            .filter(|id| featured.contains(id))
            .collect()
    }

    /// Looks an id up in the featured list first, then in the catalog.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.featured
            .iter()
            .chain(self.items.iter())
            .find(|product| product.id.as_str() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
