use crate::catalog::traits::CatalogSource;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the remote property listing API.
pub struct RestCatalog {
    client: Client,
    base_url: String,
}

impl RestCatalog {
    /// Create a new catalog client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("property-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for RestCatalog {
    async fn fetch(&self) -> Result<Vec<Property>> {
        let url = format!("{}/properties", self.base_url);
        info!("Fetching property catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach listing API")?;

        if !response.status().is_success() {
            warn!("Listing API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch catalog: {}", response.status());
        }

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to decode catalog response")?;

        debug!("Decoded {} properties from {}", properties.len(), url);

        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "listing-api"
    }
}
