use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::extraction::errors::ExtractionError;
use crate::domain::extraction::model::{ExtractedProductsResponse, ImageUrl};
use crate::domain::extraction::repository::ExtractionRepository;
use crate::domain::extraction::services::ProductExtractorService;
use crate::domain::extraction::use_cases::extract::{
    ExtractProductsParams, ExtractProductsUseCase,
};
use crate::domain::logger::Logger;

pub struct ExtractProductsUseCaseImpl {
    pub extractor: Arc<dyn ProductExtractorService>,
    pub repository: Arc<dyn ExtractionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractProductsUseCase for ExtractProductsUseCaseImpl {
    async fn execute(
        &self,
        params: ExtractProductsParams,
    ) -> Result<ExtractedProductsResponse, ExtractionError> {
        let image_url = ImageUrl::parse(&params.url).inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected image url: {}", err.detail()));
        })?;

        self.logger
            .info(&format!("Extracting products from image: {}", image_url));

        let response = match self.extractor.extract(&image_url).await {
            Ok(response) => response,
            Err(err) => {
                self.logger.error(&format!(
                    "Extraction failed for {}: {} ({})",
                    image_url,
                    err,
                    err.detail()
                ));
                return Err(err);
            }
        };

        // Only successful extractions reach the store.
        self.repository.append(&response).await?;

        self.logger.info(&format!(
            "Extracted {} products from {}",
            response.len(),
            image_url
        ));

        Ok(response)
    }
}
