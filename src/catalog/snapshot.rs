use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::models::Property;

/// A fetched catalog, timestamped so a saved copy can be told apart from a
/// live one. Serializes to the same JSON the file catalog reads back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub properties: Vec<Property>,
}

impl CatalogSnapshot {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            fetched_at: Utc::now(),
            properties,
        }
    }

    /// Write the snapshot to disk as pretty-printed JSON.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        info!(
            "Saved {} properties to {}",
            self.properties.len(),
            path.display()
        );
        Ok(())
    }
}
