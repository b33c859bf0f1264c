use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ExtractedProductsResponse;

/// Append-only store of every successful extraction since process start.
#[async_trait]
pub trait ExtractionRepository: Send + Sync {
    async fn append(&self, response: &ExtractedProductsResponse) -> Result<(), RepositoryError>;
    async fn get_all(&self) -> Result<Vec<ExtractedProductsResponse>, RepositoryError>;
}
