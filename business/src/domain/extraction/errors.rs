/// Errors raised while extracting products from an image.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction.invalid_request")]
    InvalidRequest(String),
    #[error("extraction.configuration")]
    Configuration(String),
    #[error("extraction.model_invocation")]
    ModelInvocation(String),
    #[error("extraction.provider_unavailable")]
    ProviderUnavailable(String),
    #[error("extraction.schema_validation")]
    SchemaValidation(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ExtractionError {
    /// Human readable detail carried by the variant, for logs.
    pub fn detail(&self) -> String {
        match self {
            ExtractionError::InvalidRequest(detail)
            | ExtractionError::Configuration(detail)
            | ExtractionError::ModelInvocation(detail)
            | ExtractionError::ProviderUnavailable(detail)
            | ExtractionError::SchemaValidation(detail) => detail.clone(),
            ExtractionError::Repository(err) => err.to_string(),
        }
    }
}
