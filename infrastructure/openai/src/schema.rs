use schemars::JsonSchema;
use serde::Deserialize;

use business::domain::extraction::model::{ExtractedProductsResponse, Product};

/// Product shape the model must produce. Every field is required; the
/// schema forbids extra fields but decoding ignores any the model adds.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields, rename = "Product")]
pub struct ProductSchema {
    pub id: i64,
    pub product_name: String,
    pub color: String,
    pub category: String,
    pub description: String,
}

/// Top-level structured output (must be an object for the provider).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields, rename = "ExtractedProductsResponse")]
pub struct ExtractedProductsSchema {
    pub products: Vec<ProductSchema>,
}

impl From<ProductSchema> for Product {
    fn from(schema: ProductSchema) -> Self {
        Self {
            id: schema.id,
            product_name: schema.product_name,
            color: schema.color,
            category: schema.category,
            description: schema.description,
        }
    }
}

impl From<ExtractedProductsSchema> for ExtractedProductsResponse {
    fn from(schema: ExtractedProductsSchema) -> Self {
        ExtractedProductsResponse::new(schema.products.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_schema_into_domain_response() {
        let schema: ExtractedProductsSchema = serde_json::from_str(
            r#"{"products":[{"id":1,"product_name":"Sneaker","color":"red","category":"footwear","description":"red running sneaker"}]}"#,
        )
        .unwrap();

        let response: ExtractedProductsResponse = schema.into();

        assert_eq!(
            response.products,
            vec![Product {
                id: 1,
                product_name: "Sneaker".to_string(),
                color: "red".to_string(),
                category: "footwear".to_string(),
                description: "red running sneaker".to_string(),
            }]
        );
    }

    #[test]
    fn should_ignore_extra_fields_when_required_fields_present() {
        let schema: ExtractedProductsSchema = serde_json::from_str(
            r#"{"products":[{"id":1,"product_name":"Sneaker","color":"red","category":"footwear","description":"red running sneaker","brand":"Nike"}],"source":"model"}"#,
        )
        .unwrap();

        assert_eq!(schema.products.len(), 1);
        assert_eq!(schema.products[0].product_name, "Sneaker");
    }

    #[test]
    fn should_reject_product_with_missing_field() {
        let result = serde_json::from_str::<ExtractedProductsSchema>(
            r#"{"products":[{"id":1,"product_name":"Sneaker","category":"footwear","description":"x"}]}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_product_with_wrong_id_type() {
        let result = serde_json::from_str::<ExtractedProductsSchema>(
            r#"{"products":[{"id":"one","product_name":"Sneaker","color":"red","category":"footwear","description":"x"}]}"#,
        );

        assert!(result.is_err());
    }
}
