use crate::domain::model::{FragranceRecord, OrderSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn api_version(&self) -> &str;
    fn api_key(&self) -> &str;
    fn board_id(&self) -> u64;
    fn group_id(&self) -> &str;
}

/// Read side: the fragrance listing endpoint.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FragranceRecord>>;
}

/// Write side: whatever accepts a finished order (the monday.com board API
/// in production, a mock in tests).
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, submission: &OrderSubmission) -> Result<serde_json::Value>;
}
