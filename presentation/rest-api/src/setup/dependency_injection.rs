use std::sync::Arc;

use logger::TracingLogger;
use persistence::extraction::repository::ExtractionRepositoryInMemory;

use openai::client::OpenAIClient;
use openai::product_extractor::ProductExtractorOpenAI;

use business::application::extraction::extract::ExtractProductsUseCaseImpl;
use business::application::extraction::get_all::GetAllExtractionsUseCaseImpl;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub extraction_api: crate::api::extraction::routes::ExtractionApi,
}

impl DependencyContainer {
    pub fn new(openai_config: &OpenAIConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let extraction_repository = Arc::new(ExtractionRepositoryInMemory::new());

        let openai_client = OpenAIClient::with_settings(
            openai_config.api_key.clone(),
            openai_config.base_url.clone(),
            openai_config.timeout,
        )?;
        let product_extractor = Arc::new(ProductExtractorOpenAI::new(openai_client));

        // Extraction use cases
        let extract_use_case = Arc::new(ExtractProductsUseCaseImpl {
            extractor: product_extractor,
            repository: extraction_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllExtractionsUseCaseImpl {
            repository: extraction_repository,
            logger,
        });

        let extraction_api =
            crate::api::extraction::routes::ExtractionApi::new(extract_use_case, get_all_use_case);

        Ok(Self {
            health_api,
            extraction_api,
        })
    }
}
