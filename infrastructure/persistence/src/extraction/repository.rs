use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::extraction::model::ExtractedProductsResponse;
use business::domain::extraction::repository::ExtractionRepository;

/// Process-wide extraction store.
///
/// Lives for the lifetime of the process and is lost on restart. Appends
/// take the write lock so concurrent requests never interleave a push.
pub struct ExtractionRepositoryInMemory {
    extractions: RwLock<Vec<ExtractedProductsResponse>>,
}

impl ExtractionRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            extractions: RwLock::new(Vec::new()),
        }
    }
}

impl Default for ExtractionRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtractionRepository for ExtractionRepositoryInMemory {
    async fn append(&self, response: &ExtractedProductsResponse) -> Result<(), RepositoryError> {
        let mut extractions = self.extractions.write().await;
        extractions.push(response.clone());
        tracing::debug!(total = extractions.len(), "Extraction stored");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<ExtractedProductsResponse>, RepositoryError> {
        Ok(self.extractions.read().await.clone())
    }
}
