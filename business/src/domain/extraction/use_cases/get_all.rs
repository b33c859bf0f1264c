use async_trait::async_trait;

use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::model::ExtractedProductsResponse;

#[async_trait]
pub trait GetAllExtractionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExtractedProductsResponse>, ExtractionError>;
}
