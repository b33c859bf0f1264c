use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::extraction::use_cases::extract::{
    ExtractProductsParams, ExtractProductsUseCase,
};
use business::domain::extraction::use_cases::get_all::GetAllExtractionsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::extraction::dto::{ExtractedProductsResponseDto, ImageRequest};
use crate::api::tags::ApiTags;

pub struct ExtractionApi {
    extract_use_case: Arc<dyn ExtractProductsUseCase>,
    get_all_use_case: Arc<dyn GetAllExtractionsUseCase>,
}

impl ExtractionApi {
    pub fn new(
        extract_use_case: Arc<dyn ExtractProductsUseCase>,
        get_all_use_case: Arc<dyn GetAllExtractionsUseCase>,
    ) -> Self {
        Self {
            extract_use_case,
            get_all_use_case,
        }
    }
}

/// Product extraction API
///
/// Endpoints for extracting e-commerce products from images and listing
/// every extraction made since the service started.
#[OpenApi]
impl ExtractionApi {
    /// Extract products from an image
    ///
    /// Sends the image URL to a vision model and returns every product it
    /// identified. Successful results are kept in memory.
    #[oai(path = "/extracted_products", method = "post", tag = "ApiTags::Extraction")]
    async fn extract_products(&self, body: Json<ImageRequest>) -> ExtractProductsResponse {
        match self
            .extract_use_case
            .execute(ExtractProductsParams { url: body.0.url })
            .await
        {
            Ok(response) => ExtractProductsResponse::Ok(Json(response.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => ExtractProductsResponse::UnprocessableEntity(json),
                    502 => ExtractProductsResponse::BadGateway(json),
                    503 => ExtractProductsResponse::ServiceUnavailable(json),
                    _ => ExtractProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List all extractions
    ///
    /// Returns every extraction result in the order it was produced.
    #[oai(path = "/api/products/", method = "get", tag = "ApiTags::Extraction")]
    async fn get_all_products(&self) -> GetAllExtractionsResponse {
        match self.get_all_use_case.execute().await {
            Ok(extractions) => {
                let responses: Vec<ExtractedProductsResponseDto> =
                    extractions.into_iter().map(|e| e.into()).collect();
                GetAllExtractionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllExtractionsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ExtractedProductsResponseDto>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllExtractionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ExtractedProductsResponseDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
