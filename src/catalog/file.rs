use crate::catalog::snapshot::CatalogSnapshot;
use crate::catalog::traits::CatalogSource;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Catalog backed by a JSON snapshot on disk.
///
/// Accepts either a saved [`CatalogSnapshot`] or a bare JSON array of
/// properties, so hand-written fixture files work too.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> Result<Vec<Property>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read catalog file {}", self.path.display()))?;

        let properties = match serde_json::from_str::<CatalogSnapshot>(&json) {
            Ok(snapshot) => {
                debug!("Loaded snapshot fetched at {}", snapshot.fetched_at);
                snapshot.properties
            }
            Err(_) => serde_json::from_str::<Vec<Property>>(&json)
                .with_context(|| format!("malformed catalog file {}", self.path.display()))?,
        };

        debug!(
            "Loaded {} properties from {}",
            properties.len(),
            self.path.display()
        );

        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "local-file"
    }
}
