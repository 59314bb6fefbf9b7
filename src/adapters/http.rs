use crate::core::mutation::build_create_item_mutation;
use crate::domain::model::{FragranceRecord, OrderSubmission};
use crate::domain::ports::{CatalogSource, ConfigProvider, OrderGateway};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Reads the fragrance listing endpoint. No auth header, no pagination.
pub struct HttpCatalog<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpCatalog<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> CatalogSource for HttpCatalog<C> {
    async fn fetch(&self) -> Result<Vec<FragranceRecord>> {
        tracing::debug!(
            "Fetching fragrance catalog from: {}",
            self.config.catalog_endpoint()
        );
        let response = self
            .client
            .get(self.config.catalog_endpoint())
            .send()
            .await?;

        tracing::debug!("Catalog response status: {}", response.status());
        let records = response
            .error_for_status()?
            .json::<Vec<FragranceRecord>>()
            .await?;
        Ok(records)
    }
}

/// Sends create_item mutations to the monday.com GraphQL endpoint with the
/// static credential and pinned API version.
pub struct MondayGateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> MondayGateway<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> OrderGateway for MondayGateway<C> {
    async fn create_order(&self, submission: &OrderSubmission) -> Result<serde_json::Value> {
        let mutation = build_create_item_mutation(
            self.config.board_id(),
            self.config.group_id(),
            submission,
        );

        tracing::debug!(
            "Posting create_item mutation to: {}",
            self.config.api_endpoint()
        );
        let response = self
            .client
            .post(self.config.api_endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", self.config.api_key())
            .header("API-Version", self.config.api_version())
            .json(&serde_json::json!({ "query": mutation }))
            .send()
            .await?;

        tracing::debug!("Board API response status: {}", response.status());

        // parse, don't schema-validate: callers only log the body
        let text = response.error_for_status()?.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;
        Ok(body)
    }
}
