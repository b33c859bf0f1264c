use async_trait::async_trait;

use super::errors::ExtractionError;
use super::model::{ExtractedProductsResponse, ImageUrl};

/// Service port for extracting e-commerce products from an image.
///
/// Implementations call an external vision model once and must return a
/// fully populated response or fail. No retries happen at this level.
#[async_trait]
pub trait ProductExtractorService: Send + Sync {
    async fn extract(
        &self,
        image_url: &ImageUrl,
    ) -> Result<ExtractedProductsResponse, ExtractionError>;
}
