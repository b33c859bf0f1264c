use async_trait::async_trait;

use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::model::ExtractedProductsResponse;

pub struct ExtractProductsParams {
    pub url: String,
}

#[async_trait]
pub trait ExtractProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ExtractProductsParams,
    ) -> Result<ExtractedProductsResponse, ExtractionError>;
}
