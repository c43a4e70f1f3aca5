//! Loading category pages from a JSON catalogue file.
//!
//! File shape:
//!
//! ```json
//! { "categories": [ { "config": { "id": "...", ... }, "products": [ ... ] } ] }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use maskshop_core::DomainError;

use crate::catalog::Catalog;
use crate::category::{CategoryConfig, CategoryPage};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalogue file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    categories: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    config: CategoryConfig,
    products: Catalog,
}

/// Parse and validate category pages from JSON text.
pub fn parse_pages(json: &str) -> Result<Vec<CategoryPage>, CatalogLoadError> {
    let file: CatalogueFile = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    let mut pages = Vec::with_capacity(file.categories.len());
    for entry in file.categories {
        if !seen.insert(entry.config.id.clone()) {
            return Err(DomainError::invariant(format!(
                "duplicate category id `{}`",
                entry.config.id
            ))
            .into());
        }
        pages.push(CategoryPage::new(entry.config, entry.products)?);
    }
    Ok(pages)
}

/// Read and validate category pages from a JSON file on disk.
pub fn load_pages(path: impl AsRef<Path>) -> Result<Vec<CategoryPage>, CatalogLoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pages = parse_pages(&json)?;
    tracing::info!(path = %path.display(), categories = pages.len(), "catalogue loaded");
    Ok(pages)
}
