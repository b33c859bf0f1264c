use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::model::ExtractedProductsResponse;
use crate::domain::extraction::repository::ExtractionRepository;
use crate::domain::extraction::use_cases::get_all::GetAllExtractionsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllExtractionsUseCaseImpl {
    pub repository: Arc<dyn ExtractionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllExtractionsUseCase for GetAllExtractionsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ExtractedProductsResponse>, ExtractionError> {
        self.logger.debug("Fetching all extracted products");
        let extractions = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} extractions", extractions.len()));
        Ok(extractions)
    }
}
