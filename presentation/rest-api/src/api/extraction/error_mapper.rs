use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::extraction::errors::ExtractionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExtractionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ExtractionError::InvalidRequest(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "InvalidRequestError")
            }
            ExtractionError::SchemaValidation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "SchemaValidationError")
            }
            ExtractionError::ModelInvocation(_) => (StatusCode::BAD_GATEWAY, "ModelInvocationError"),
            ExtractionError::ProviderUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "ModelInvocationError")
            }
            ExtractionError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ConfigurationError")
            }
            ExtractionError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
