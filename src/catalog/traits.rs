use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all property catalog sources
/// This allows swapping the remote listing API for a local snapshot (and
/// adding further backends later) without touching the query side
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full property collection, newest listing first
    async fn fetch(&self) -> Result<Vec<Property>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
