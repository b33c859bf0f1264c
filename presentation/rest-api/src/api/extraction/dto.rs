use poem_openapi::types::Example;
use poem_openapi::Object;

use business::domain::extraction::model::{ExtractedProductsResponse, Product};

/// Image to extract products from.
#[derive(Debug, Clone, Object)]
#[oai(example)]
pub struct ImageRequest {
    /// Publicly reachable URL of the image
    pub url: String,
}

impl Example for ImageRequest {
    fn example() -> Self {
        Self {
            url: "https://images.pexels.com/photos/356056/pexels-photo-356056.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename = "Product")]
pub struct ProductDto {
    /// Position of the product within the response, assigned by the model
    pub id: i64,
    pub product_name: String,
    pub color: String,
    pub category: String,
    /// Descriptive query to search for the product
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename = "ExtractedProductsResponse")]
pub struct ExtractedProductsResponseDto {
    pub products: Vec<ProductDto>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            color: product.color,
            category: product.category,
            description: product.description,
        }
    }
}

impl From<ExtractedProductsResponse> for ExtractedProductsResponseDto {
    fn from(response: ExtractedProductsResponse) -> Self {
        Self {
            products: response.products.into_iter().map(|p| p.into()).collect(),
        }
    }
}
