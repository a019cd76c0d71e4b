use std::path::Path;

use thiserror::Error;

use crate::models::{Provider, ProvidersByCategory};

/// Errors that can occur while loading the provider catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Published providers grouped by category key
///
/// Stands in for the directory's data store: records are expected to be
/// already filtered to published, non-deleted listings.
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    providers: ProvidersByCategory,
}

impl ProviderCatalog {
    pub fn new(providers: ProvidersByCategory) -> Self {
        Self { providers }
    }

    /// Load a catalog from a JSON file of the form `{ "<category>": [Provider, ...] }`
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded {} providers in {} categories from {}",
            catalog.len(),
            catalog.providers.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let providers: ProvidersByCategory = serde_json::from_str(json)?;
        Ok(Self { providers })
    }

    pub fn providers(&self) -> &ProvidersByCategory {
        &self.providers
    }

    pub fn category(&self, key: &str) -> &[Provider] {
        self.providers.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of providers across all categories
    pub fn len(&self) -> usize {
        self.providers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
