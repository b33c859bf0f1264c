use url::Url;

use super::errors::ExtractionError;

/// A single product identified in an image.
///
/// `id` is assigned by the model and only meaningful within one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub color: String,
    pub category: String,
    pub description: String,
}

/// Every product the model found in one image, in the order it listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedProductsResponse {
    pub products: Vec<Product>,
}

impl ExtractedProductsResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Reference to a remotely hosted image.
///
/// Only the syntax is checked here. Reachability is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(Url);

impl ImageUrl {
    pub fn parse(raw: &str) -> Result<Self, ExtractionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExtractionError::InvalidRequest(
                "image url is empty".to_string(),
            ));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| ExtractionError::InvalidRequest(format!("{trimmed}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExtractionError::InvalidRequest(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ExtractionError::InvalidRequest(format!(
                "missing host: {trimmed}"
            )));
        }

        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
